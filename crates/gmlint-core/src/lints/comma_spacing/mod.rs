pub(crate) mod comma_spacing;
