//! Interactive terminal shop.
//!
//! A line-oriented session over the same catalog, shipping and checkout
//! logic as the web page. The cart lives for the length of the session.
//!
//! # Usage
//!
//! ```bash
//! vitrine shop
//! > add 1
//! > ship 01001-000
//! > checkout
//! ```

use std::io::{BufRead, Write};
use std::str::FromStr;

use thiserror::Error;
use vitrine_core::{CartStore, ProductId};
use vitrine_storefront::checkout::{self, CheckoutOutcome, Prompt};
use vitrine_storefront::messages;
use vitrine_storefront::views::CartView;

use super::{Clients, CommandError, catalog, shipping};

const HELP: &str = "\
Comandos:
  products      lista os produtos
  add <id>      adiciona um produto ao carrinho
  cart          mostra o carrinho
  ship <cep>    calcula o frete
  checkout      finaliza a compra
  help          mostra esta ajuda
  quit          sai";

/// One line of shell input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Products,
    Add(ProductId),
    Cart,
    /// Raw postal code input; validated by the calculator.
    Ship(String),
    Checkout,
    Help,
    Quit,
    /// Blank line.
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Comando desconhecido: {0}. Digite 'help' para ver os comandos.")]
    Unknown(String),

    #[error("Uso: {0}")]
    Usage(&'static str),
}

impl FromStr for ShellCommand {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return Ok(Self::Empty);
        };

        match command.to_lowercase().as_str() {
            "products" | "produtos" => Ok(Self::Products),
            "add" => words
                .next()
                .and_then(|id| id.parse().ok())
                .map(Self::Add)
                .ok_or(ParseError::Usage("add <id>")),
            "cart" | "carrinho" => Ok(Self::Cart),
            "ship" | "frete" => {
                let code: String = words.collect();
                if code.is_empty() {
                    Err(ParseError::Usage("ship <cep>"))
                } else {
                    Ok(Self::Ship(code))
                }
            }
            "checkout" => Ok(Self::Checkout),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(ParseError::Unknown(other.to_string())),
        }
    }
}

/// Blocking alert/confirm over the shell's own input and output.
pub struct TerminalPrompt<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
}

impl<'a, R: BufRead, W: Write> TerminalPrompt<'a, R, W> {
    pub fn new(input: &'a mut R, output: &'a mut W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Prompt for TerminalPrompt<'_, R, W> {
    fn alert(&mut self, message: &str) {
        if let Err(e) = writeln!(self.output, "{message}") {
            tracing::warn!("Failed to write alert: {e}");
        }
    }

    /// Accepts `s`, `sim`, `y` or `yes`; anything else, including end of
    /// input, declines.
    fn confirm(&mut self, message: &str) -> bool {
        if let Err(e) = write!(self.output, "{message}\n[s/N] ").and_then(|()| self.output.flush())
        {
            tracing::warn!("Failed to write prompt: {e}");
            return false;
        }

        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(_) => matches!(
                answer.trim().to_lowercase().as_str(),
                "s" | "sim" | "y" | "yes"
            ),
            Err(e) => {
                tracing::warn!("Failed to read answer: {e}");
                false
            }
        }
    }
}

/// An interactive session.
pub struct Shell<R, W> {
    input: R,
    output: W,
    clients: Clients,
    cart: CartStore,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, clients: Clients) -> Self {
        Self {
            input,
            output,
            clients,
            cart: CartStore::new(),
        }
    }

    #[must_use]
    pub const fn cart(&self) -> &CartStore {
        &self.cart
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Read and run commands until `quit` or end of input.
    pub async fn run(&mut self) -> Result<(), CommandError> {
        writeln!(self.output, "Vitrine. Digite 'help' para ver os comandos.")?;

        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                break;
            }

            match line.parse::<ShellCommand>() {
                Ok(command) => {
                    if !self.execute(command).await? {
                        break;
                    }
                }
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
        Ok(())
    }

    /// Run one command. Returns `false` when the session should end.
    pub async fn execute(&mut self, command: ShellCommand) -> Result<bool, CommandError> {
        match command {
            ShellCommand::Products => {
                match catalog::list(&self.clients.catalog, &mut self.output).await {
                    Ok(()) => {}
                    Err(CommandError::Catalog(e)) => {
                        tracing::error!(error = %e, "Failed to load products");
                    }
                    Err(e) => return Err(e),
                }
            }
            ShellCommand::Add(id) => self.add(id).await?,
            ShellCommand::Cart => self.write_cart()?,
            ShellCommand::Ship(code) => {
                shipping::quote(&self.clients.shipping, &code, &mut self.output).await?;
            }
            ShellCommand::Checkout => {
                let mut prompt = TerminalPrompt::new(&mut self.input, &mut self.output);
                if let CheckoutOutcome::Completed { .. } = checkout::run(&mut self.cart, &mut prompt) {
                    self.write_cart()?;
                }
            }
            ShellCommand::Help => writeln!(self.output, "{HELP}")?,
            ShellCommand::Quit => return Ok(false),
            ShellCommand::Empty => {}
        }
        Ok(true)
    }

    async fn add(&mut self, id: ProductId) -> Result<(), CommandError> {
        match self.clients.catalog.get_product(id).await {
            Ok(product) => {
                let quantity = self.cart.add(product);
                tracing::info!(product_id = %id, quantity, "Added to cart");
                self.write_cart()?;
            }
            Err(e) => {
                tracing::error!(product_id = %id, error = %e, "Failed to add product to cart");
                writeln!(self.output, "{}", messages::ADD_TO_CART_FAILED)?;
            }
        }
        Ok(())
    }

    fn write_cart(&mut self) -> std::io::Result<()> {
        let view = CartView::render(&self.cart);
        if view.is_empty {
            return writeln!(self.output, "{}", view.empty_text);
        }
        for line in &view.lines {
            writeln!(self.output, "  {line}")?;
        }
        writeln!(self.output, "{}", view.total)
    }
}
