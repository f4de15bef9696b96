pub(crate) mod jump;
