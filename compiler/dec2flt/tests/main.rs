mod atof;
mod atol;
mod digits;
mod lemire;
mod properties;
