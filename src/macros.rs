//! Writing into a `String` cannot fail, so these unwrap the `fmt::Result`.

macro_rules! ln {
    ($f:ident, $($tt:tt)*) => (::std::writeln!($f, $($tt)*).unwrap());
    ($f:ident) => (::std::writeln!($f).unwrap());
}

macro_rules! ml {
    ($f:ident, $($tt:tt)*) => (::indoc::writedoc!($f, $($tt)*).unwrap());
}
