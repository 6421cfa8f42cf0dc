use std::fs;
use std::io;
use std::path::Path;

/// Escritura atómica: vuelca a `<path>.tmp`, sincroniza y renombra.
///
/// Un corte a mitad de escritura deja el archivo anterior intacto; el
/// `.tmp` huérfano se sobrescribe en el siguiente intento.
pub fn atomic_write_str(path: &Path, contents: &str) -> io::Result<()> {
  let tmp_path = path.with_extension("tmp");

  fs::write(&tmp_path, contents)?;
  fs::File::open(&tmp_path)?.sync_all()?;
  fs::rename(&tmp_path, path)?;
  Ok(())
}
