// Domain layer: plain data carried between the calculator, formatter and verifier.

pub mod model;
