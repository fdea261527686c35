//! Simulated checkout.
//!
//! Checkout is a two-step exchange with the shopper: [`begin`] decides
//! whether to alert (empty cart) or ask for confirmation, and [`finish`]
//! applies the answer. [`run`] drives both steps through a blocking
//! [`Prompt`], which is how the terminal shell checks out.
//!
//! The web page shows the same steps as a modal dialog, but the answer
//! arrives in a separate request. [`confirm`] only applies it when the cart
//! is still at the revision the question was asked about.

use tracing::info;
use vitrine_core::{CartStore, Price};

use crate::messages;

/// Blocking, modal interaction with the shopper.
pub trait Prompt {
    /// Show a message and wait until it is acknowledged.
    fn alert(&mut self, message: &str);

    /// Ask a yes/no question and wait for the answer.
    fn confirm(&mut self, message: &str) -> bool;
}

/// What to show when the shopper asks to check out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutStep {
    /// Nothing to buy; show the alert and stop.
    EmptyCart {
        /// Alert text.
        alert: &'static str,
    },
    /// Ask the shopper to confirm the purchase.
    Confirm {
        /// Confirmation question including the cart total.
        prompt: String,
        /// Cart total at the time of asking.
        total: Price,
        /// Cart revision the question describes.
        revision: u64,
    },
}

/// How a checkout ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// The cart was empty; nothing changed.
    EmptyCart,
    /// The shopper declined; nothing changed.
    Declined,
    /// The cart changed after the question was asked; nothing changed.
    Changed,
    /// The purchase was confirmed and the cart emptied.
    Completed {
        /// Success acknowledgment text.
        acknowledgment: &'static str,
        /// Amount that was "charged".
        total: Price,
    },
}

/// First step: alert on an empty cart, otherwise build the confirmation prompt.
#[must_use]
pub fn begin(cart: &CartStore) -> CheckoutStep {
    if cart.is_empty() {
        return CheckoutStep::EmptyCart {
            alert: messages::CART_EMPTY,
        };
    }

    let total = cart.total();
    CheckoutStep::Confirm {
        prompt: messages::checkout_prompt(total),
        total,
        revision: cart.revision(),
    }
}

/// Second step: apply the shopper's answer.
///
/// Clears the cart only when `accepted` is true and the cart still holds
/// something.
pub fn finish(cart: &mut CartStore, accepted: bool) -> CheckoutOutcome {
    if cart.is_empty() {
        return CheckoutOutcome::EmptyCart;
    }
    if !accepted {
        return CheckoutOutcome::Declined;
    }

    let total = cart.total();
    let items = cart.item_count();
    cart.clear();
    info!(total = %total, items, "Checkout completed");

    CheckoutOutcome::Completed {
        acknowledgment: messages::CHECKOUT_COMPLETED,
        total,
    }
}

/// Second step for a confirmation answered out of band.
///
/// `revision` is the one carried by the [`CheckoutStep::Confirm`] the shopper
/// accepted. A cart that moved on since is left alone.
pub fn confirm(cart: &mut CartStore, revision: u64) -> CheckoutOutcome {
    if cart.is_empty() {
        return CheckoutOutcome::EmptyCart;
    }
    if cart.revision() != revision {
        info!(
            confirmed = revision,
            current = cart.revision(),
            "Checkout confirmation is stale"
        );
        return CheckoutOutcome::Changed;
    }
    finish(cart, true)
}

/// Run a whole checkout against a blocking prompt.
pub fn run(cart: &mut CartStore, prompt: &mut impl Prompt) -> CheckoutOutcome {
    match begin(cart) {
        CheckoutStep::EmptyCart { alert } => {
            prompt.alert(alert);
            CheckoutOutcome::EmptyCart
        }
        CheckoutStep::Confirm { prompt: question, .. } => {
            let accepted = prompt.confirm(&question);
            let outcome = finish(cart, accepted);
            if let CheckoutOutcome::Completed { acknowledgment, .. } = &outcome {
                prompt.alert(acknowledgment);
            }
            outcome
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use vitrine_core::{Product, ProductId};

    use super::*;

    /// Records every interaction and answers confirmations from a script.
    #[derive(Default)]
    struct ScriptedPrompt {
        answer: bool,
        alerts: Vec<String>,
        questions: Vec<String>,
    }

    impl Prompt for ScriptedPrompt {
        fn alert(&mut self, message: &str) {
            self.alerts.push(message.to_string());
        }

        fn confirm(&mut self, message: &str) -> bool {
            self.questions.push(message.to_string());
            self.answer
        }
    }

    fn cart_with_twenty() -> CartStore {
        let mut cart = CartStore::new();
        let product = Product::new(
            ProductId::new(1),
            "Backpack",
            Price::from_cents(1000).unwrap(),
            "",
        );
        cart.add(product.clone());
        cart.add(product);
        cart
    }

    #[test]
    fn test_begin_empty_cart_alerts() {
        assert_eq!(
            begin(&CartStore::new()),
            CheckoutStep::EmptyCart {
                alert: "Seu carrinho está vazio."
            }
        );
    }

    #[test]
    fn test_begin_prompt_includes_total() {
        let CheckoutStep::Confirm { prompt, total, .. } = begin(&cart_with_twenty()) else {
            panic!("expected confirmation");
        };
        assert_eq!(total.formatted_amount(), "20.00");
        assert_eq!(
            prompt,
            "Você tem certeza que deseja finalizar a compra?\n\nTotal do Carrinho: R$ 20.00"
        );
    }

    #[test]
    fn test_run_empty_cart() {
        let mut cart = CartStore::new();
        let mut prompt = ScriptedPrompt::default();

        assert_eq!(run(&mut cart, &mut prompt), CheckoutOutcome::EmptyCart);
        assert_eq!(prompt.alerts, vec!["Seu carrinho está vazio."]);
        assert!(prompt.questions.is_empty());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_run_accepted_clears_cart() {
        let mut cart = cart_with_twenty();
        let mut prompt = ScriptedPrompt {
            answer: true,
            ..ScriptedPrompt::default()
        };

        let outcome = run(&mut cart, &mut prompt);

        assert!(matches!(outcome, CheckoutOutcome::Completed { total, .. } if total.formatted_amount() == "20.00"));
        assert!(cart.is_empty());
        assert!(cart.total().is_zero());
        assert_eq!(prompt.questions.len(), 1);
        assert_eq!(prompt.alerts, vec!["Compra finalizada com sucesso!"]);
    }

    #[test]
    fn test_run_declined_changes_nothing() {
        let mut cart = cart_with_twenty();
        let before = cart.clone();
        let mut prompt = ScriptedPrompt::default();

        assert_eq!(run(&mut cart, &mut prompt), CheckoutOutcome::Declined);
        assert_eq!(cart.entries(), before.entries());
        assert_eq!(cart.total(), before.total());
        assert!(prompt.alerts.is_empty());
    }

    #[test]
    fn test_finish_on_emptied_cart() {
        let mut cart = CartStore::new();
        assert_eq!(finish(&mut cart, true), CheckoutOutcome::EmptyCart);
    }

    #[test]
    fn test_confirm_matching_revision_completes() {
        let mut cart = cart_with_twenty();
        let CheckoutStep::Confirm { revision, .. } = begin(&cart) else {
            panic!("expected confirmation");
        };

        let outcome = confirm(&mut cart, revision);

        assert!(matches!(outcome, CheckoutOutcome::Completed { total, .. } if total.formatted_amount() == "20.00"));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_confirm_after_add_keeps_cart() {
        let mut cart = cart_with_twenty();
        let CheckoutStep::Confirm { revision, .. } = begin(&cart) else {
            panic!("expected confirmation");
        };
        cart.add(Product::new(
            ProductId::new(2),
            "Shirt",
            Price::from_cents(500).unwrap(),
            "",
        ));

        assert_eq!(confirm(&mut cart, revision), CheckoutOutcome::Changed);
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total().formatted_amount(), "25.00");
    }

    #[test]
    fn test_confirm_on_emptied_cart() {
        let mut cart = cart_with_twenty();
        let revision = cart.revision();
        cart.clear();

        assert_eq!(confirm(&mut cart, revision), CheckoutOutcome::EmptyCart);
    }
}
