pub use super::customer_account::Entity as CustomerAccount;
pub use super::order::Entity as Order;
pub use super::order_product::Entity as OrderProduct;
pub use super::product::Entity as Product;
