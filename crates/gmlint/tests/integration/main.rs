mod gmlint;
mod help;
mod rules;
