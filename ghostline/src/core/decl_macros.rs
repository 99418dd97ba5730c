// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Wrap the given expression in [`Ok`]. With no arguments this is `Ok(())`.
///
/// ```
/// use r3bl_ghostline::ok;
///
/// fn unit() -> std::io::Result<()> { ok!() }
/// fn value() -> std::io::Result<u8> { ok!(42) }
///
/// assert!(unit().is_ok());
/// assert_eq!(value().unwrap(), 42);
/// ```
#[macro_export]
macro_rules! ok {
    () => {
        Ok(())
    };
    ($value:expr) => {
        Ok($value)
    };
}
