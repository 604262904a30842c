pub mod hashmap_account_store;
