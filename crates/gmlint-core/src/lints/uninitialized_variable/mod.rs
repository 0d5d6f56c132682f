pub(crate) mod uninitialized_variable;
