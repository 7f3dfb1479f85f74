//! Declaration and assertion macros used by test authors

/// Declare a test case.
///
/// The name is a display label; the declaration site is taken from the
/// invocation. The case is registered before `main` runs.
///
/// ```ignore
/// toytest::test_case!("addition works", {
///     toytest::require!(1 + 1 == 2);
/// });
/// ```
#[macro_export]
macro_rules! test_case {
    ($name:expr, $body:block $(,)?) => {
        const _: () = {
            #[allow(unreachable_code)]
            fn __toytest_body() -> $crate::Outcome {
                $body
                ::core::result::Result::Ok(())
            }

            $crate::inventory::submit! {
                $crate::Declaration::new($name, ::core::file!(), ::core::line!(), __toytest_body)
            }
        };
    };
}

/// Check a predicate inside a test body.
///
/// On failure the call site and the predicate's source text are recorded on
/// the running test, and the enclosing body returns immediately.
#[macro_export]
macro_rules! require {
    ($predicate:expr $(,)?) => {
        $crate::assertion::require(
            $predicate,
            ::core::stringify!($predicate),
            ::core::file!(),
            ::core::line!(),
        )?
    };
}
