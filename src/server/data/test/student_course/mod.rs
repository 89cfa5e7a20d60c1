use super::*;

mod hydrate;
mod relate;
mod replace;
mod unlink;
