pub(crate) mod control_statement;
