pub(crate) mod naming_convention;
