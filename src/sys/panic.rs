use std::error::Error;

use derive_more::{Display, Error};

pub trait Panic: Error {
    fn panic(&self) -> ! {
        panic!("{}", self)
    }
}

#[derive(Debug, Display, Error)]
#[display("buffer address rejected by the kernel")]
pub struct BadAddrPanic;
impl Panic for BadAddrPanic {}
