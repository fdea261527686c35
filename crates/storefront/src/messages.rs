//! User-facing text (pt-BR).
//!
//! Everything a shopper can read lives here so the page, the terminal shell
//! and the tests agree on the exact wording.

pub const CATALOG_UNAVAILABLE: &str = "Não foi possível carregar os produtos.";
pub const ADD_TO_CART: &str = "Adicionar ao Carrinho";
pub const ADD_TO_CART_FAILED: &str = "Não foi possível adicionar o produto ao carrinho.";

pub const CART_EMPTY: &str = "Seu carrinho está vazio.";

pub const POSTAL_CODE_INVALID: &str = "Digite um CEP válido.";
pub const POSTAL_CODE_NOT_FOUND: &str = "CEP não encontrado.";
pub const SHIPPING_FAILED: &str = "Erro ao calcular frete.";

pub const CHECKOUT_QUESTION: &str = "Você tem certeza que deseja finalizar a compra?";
pub const CHECKOUT_COMPLETED: &str = "Compra finalizada com sucesso!";

/// `"Preço: R$ 10.00"`
pub fn unit_price(price: impl std::fmt::Display) -> String {
    format!("Preço: {price}")
}

/// `"Total: R$ 20.00"`
pub fn cart_total(total: impl std::fmt::Display) -> String {
    format!("Total: {total}")
}

/// `"Frete: R$ 15.00"`
pub fn shipping_fee(fee: impl std::fmt::Display) -> String {
    format!("Frete: {fee}")
}

/// Confirmation prompt shown before clearing the cart.
pub fn checkout_prompt(total: impl std::fmt::Display) -> String {
    format!("{CHECKOUT_QUESTION}\n\nTotal do Carrinho: {total}")
}
