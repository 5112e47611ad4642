/// Asserts that evaluating the block panics, catching the panic so that the test can continue.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "evaluation was expected to panic")
    };
    ($run:block, $msg:literal) => {
        assert!(std::panic::catch_unwind(|| $run).is_err(), $msg);
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
