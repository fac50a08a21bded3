pub mod config_ops;
pub mod dict_ops;
pub mod translate_ops;

/// Print the error with a message and exit 1.
macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}
pub(crate) use die;
