use fltk::text::TextBuffer;

/// Copy a TextBuffer's contents into a `String`.
///
/// `TextBuffer::text()` copies the `malloc()`'d string returned by
/// `Fl_Text_Buffer_text()` but never frees it. The status bar reads the
/// whole buffer on every edit, so go through the C API and free it here.
pub fn buffer_text(buf: &TextBuffer) -> String {
    unsafe extern "C" {
        fn Fl_Text_Buffer_text(buf: *mut std::ffi::c_void) -> *mut std::ffi::c_char;
        fn free(ptr: *mut std::ffi::c_void);
    }

    // SAFETY: `buf.as_ptr()` is the live Fl_Text_Buffer behind `buf`. FLTK
    // returns a NUL-terminated malloc'd copy (or null), which we read once
    // and release with the matching `free`.
    unsafe {
        let ptr = Fl_Text_Buffer_text(buf.as_ptr() as *mut std::ffi::c_void);
        if ptr.is_null() {
            return String::new();
        }
        let text = std::ffi::CStr::from_ptr(ptr).to_string_lossy().into_owned();
        free(ptr as *mut std::ffi::c_void);
        text
    }
}
