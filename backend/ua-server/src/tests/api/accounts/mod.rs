mod update_account_request;
