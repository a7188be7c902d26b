mod clone;
mod debug;
mod eq_ord;
mod from;
mod from_iter;
mod hash;
mod into_iter;
