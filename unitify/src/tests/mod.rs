// Registry tests
mod registry;

// Unit model tests
mod unit_model;
