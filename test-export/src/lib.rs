// Exported function to have a .dll/.so the probe can load at runtime to check
// that a C-linkage symbol is visible in the dynamic symbol table, and that
// calling it across the library boundary returns the expected value.
#[no_mangle]
#[allow(non_snake_case)]
pub extern "C" fn getFortyTwo() -> i32 {
    42
}
