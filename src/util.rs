/// Simple macro to prevent boilerplate of `.to_owned()`
///
/// The macro returns a `String` from the given `&str` value.
///
/// # Examples
///
/// ```rust
/// use modbus_coil_reader::str;
///
/// let value: String = str!("127.0.0.1");
/// assert_eq!(value, "127.0.0.1");
/// ```
#[macro_export]
macro_rules! str {
    ($a:expr) => {
        $a.to_owned()
    };
}

/// Trait providing the `panic()` method that calls the given function and panics with the returned
/// message
///
/// This trait exists to provide the same as `expect()` but with the advantage that you have the
/// error available to include the error into the panic message.
///
/// ```rust
/// use modbus_coil_reader::util::Expect;
///
/// let result: Result<u8, &'static str> = Ok(1);
/// assert_eq!(result.panic(|e| format!("{} just happened", e)), 1);
/// ```
pub trait Expect<F: FnOnce(Self::Error) -> String> {
    type Value;
    type Error;

    fn panic(self, f: F) -> Self::Value;
}

/// Generic implementation of Expect for any Result type
impl<T, E, F: FnOnce(E) -> String> Expect<F> for Result<T, E> {
    type Value = T;
    type Error = E;
    fn panic(self, f: F) -> Self::Value {
        match self {
            Ok(v) => v,
            Err(e) => panic!("{}", f(e)),
        }
    }
}
