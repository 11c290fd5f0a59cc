#[cfg(feature = "debug")]
#[macro_export]
macro_rules! debug {
    ($val:expr $(,)?) => {{
        match $val {
            tmp => {
                eprintln!("[{}:{}] {} = {:#?}", file!(), line!(), stringify!($val), &tmp);
            }
        }
    }};
    ( $( $t:expr ),* $(,)? ) => {{
        eprint!("[{}:{}]", file!(), line!());
        $(
            eprint!(" {}", $t);
        )*
        eprintln!();
    }};
}

#[cfg(not(feature = "debug"))]
#[macro_export]
macro_rules! debug {
    ($x:expr) => {{}};
    ($($arg:tt)*) => {};
}
