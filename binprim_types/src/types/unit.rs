/// The zero-width value. Occupies no bytes on the wire.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Default, Debug)]
pub struct Unit;

impl From<()> for Unit {
    fn from(_: ()) -> Self {
        Unit
    }
}
