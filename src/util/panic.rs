/// Asserts that the provided block unwinds with a signaled error rather than returning or
/// panicking for some other reason.
#[allow(unused_macros)]
macro_rules! assert_signals {
    ($run:block) => {
        assert_signals!($run, "block failed to signal an error")
    };
    ($run:block, $msg:literal) => {
        assert!(
            $crate::signal::intercept(|| {
                $run;
            })
            .is_err_and(|e| e.is_signal()),
            $msg
        );
    };
}

#[allow(unused_imports)]
pub(crate) use assert_signals;
