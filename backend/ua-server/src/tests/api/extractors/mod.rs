mod current_account;
