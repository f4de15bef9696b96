pub(crate) mod panel;
