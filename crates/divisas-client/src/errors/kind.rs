/// Classification of a [`RateError`](super::RateError).
///
/// Every kind is terminal for the call that produced it. Callers that want
/// to retry must invoke the operation again.
///
/// | Kind | Raised when |
/// |------|-------------|
/// | `Transport` | Non-success HTTP status or network failure |
/// | `Parse` | Body or a record value does not match the snapshot format |
/// | `Lookup` | A requested currency is missing from the rate table |
/// | `Computation` | The cross-rate is undefined (zero target) or out of range |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Transport,
    Parse,
    Lookup,
    Computation,
}
