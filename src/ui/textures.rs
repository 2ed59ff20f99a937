use gtk4::gdk;
use gtk4::gdk_pixbuf::{InterpType, Pixbuf};
use gtk4::glib;

use pokepairs::{Error, Result};

/// Decodes a downloaded sprite and scales it to a `size`-pixel square card face.
pub fn decode_texture(label: &str, bytes: &[u8], size: i32) -> Result<gdk::Texture> {
    let decode_error = |reason: String| Error::Decode {
        label: label.to_string(),
        reason,
    };

    let stream = gio::MemoryInputStream::from_bytes(&glib::Bytes::from(bytes));
    let pixbuf = Pixbuf::from_stream(&stream, None::<&gio::Cancellable>)
        .map_err(|err| decode_error(err.to_string()))?;
    let scaled = pixbuf
        .scale_simple(size, size, InterpType::Hyper)
        .ok_or_else(|| decode_error(format!("could not scale to {size}x{size}")))?;

    Ok(gdk::Texture::for_pixbuf(&scaled))
}
