//! The building blocks every information element is composed of. Each IE implements
//! [`Writable`] and [`Readable`] by hand, calling into the [`UperWriter`] and [`UperReader`]
//! in exactly the field order the wire format dictates.

use crate::io::per::Error;

pub mod bitstring;
pub mod choice;
pub mod critical;
pub mod enumerated;
pub mod extension;
pub mod io;

pub use self::io::uper::UperReader;
pub use self::io::uper::UperWriter;

pub trait Writable {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error>;
}

pub trait Readable: Sized {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error>;
}

impl<T: Writable + ?Sized> Writable for &T {
    #[inline]
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        T::write(self, writer)
    }
}

impl<T: Writable> Writable for Box<T> {
    #[inline]
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        T::write(self, writer)
    }
}

impl<T: Readable> Readable for Box<T> {
    #[inline]
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        T::read(reader).map(Box::new)
    }
}

/// Adapts a closure to [`Writable`], used for extension addition groups and other ad-hoc
/// compositions that have no type of their own
pub struct WriteWith<F>(pub F);

impl<F: Fn(&mut UperWriter) -> Result<(), Error>> Writable for WriteWith<F> {
    #[inline]
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        (self.0)(writer)
    }
}

impl Writable for bool {
    #[inline]
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_bit(*self)
    }
}

impl Readable for bool {
    #[inline]
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        reader.read_bit()
    }
}

/// The empty `SEQUENCE {}` used as placeholder for not yet defined non-critical extensions and
/// as `NULL`, neither takes any bits on the wire
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Null;

impl Writable for Null {
    #[inline]
    fn write(&self, _writer: &mut UperWriter) -> Result<(), Error> {
        Ok(())
    }
}

impl Readable for Null {
    #[inline]
    fn read(_reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(Null)
    }
}
