mod customer_account;
mod order;
mod product;
