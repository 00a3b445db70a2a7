pub mod current_account;
