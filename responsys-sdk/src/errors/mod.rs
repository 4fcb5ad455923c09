pub mod responsys_error;
