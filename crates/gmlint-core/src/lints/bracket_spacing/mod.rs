pub(crate) mod bracket_spacing;
