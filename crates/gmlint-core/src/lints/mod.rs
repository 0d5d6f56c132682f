pub(crate) mod bracket_spacing;
pub(crate) mod comma_spacing;
pub(crate) mod control_statement;
pub(crate) mod indentation;
pub(crate) mod line_length;
pub(crate) mod naming_convention;
pub(crate) mod trailing_whitespace;
pub(crate) mod uninitialized_variable;
pub(crate) mod unused_variable;
