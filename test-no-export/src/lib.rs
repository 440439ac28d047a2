// A loadable .dll/.so that does not export getFortyTwo, to tell symbol
// resolution failures apart from load failures
#[no_mangle]
#[allow(non_snake_case)]
pub extern "C" fn getFortyThree() -> i32 {
    43
}
