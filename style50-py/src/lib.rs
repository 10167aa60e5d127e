use std::ffi::OsString;

use pyo3::prelude::*;

use style50_lib::run::run_main;

/// Run style50 with python's `sys.argv`.
///
/// The arguments are taken as OS strings: python decodes undecodable bytes in
/// `sys.argv` with the `surrogateescape` handler, and pyo3 re-encodes them with
/// `os.fsencode()` semantics, so such file names arrive byte-for-byte.
#[pyfunction]
fn main(args: Vec<OsString>) -> PyResult<i32> {
    Ok(run_main(args))
}

/// The python binding for the style50 package. It only exposes a submodule named
/// ``style50.run`` whose only exposed function is used as the console script's
/// entrypoint (``main(sys.argv)``).
#[pymodule]
fn style50(py: Python, m: &PyModule) -> PyResult<()> {
    let run_submodule = PyModule::new(py, "run")?;
    run_submodule.add_function(wrap_pyfunction!(main, run_submodule)?)?;
    m.add_submodule(run_submodule)?;
    Ok(())
}
