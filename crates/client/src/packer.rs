//! Buendeln von Dateien und Verzeichnissen zu einem einzigen Blob
//!
//! Fuer den Ablauf in [`crate::flow`] ist das Ergebnis opak. Die
//! Standard-Implementierung erzeugt ein gzip-komprimiertes tar-Archiv.

use std::fs;
use std::path::Path;

use flate2::{read::GzDecoder, write::GzEncoder, Compression};

use crate::error::{ClientError, ClientResult};

/// Erzeugt aus einem Pfad einen Blob und stellt ihn wieder her
pub trait Packer {
    /// Kennung des Formats, wird als Metadatum mitgeschickt
    fn format(&self) -> &'static str;

    fn packen(&self, pfad: &Path) -> ClientResult<Vec<u8>>;

    fn entpacken(&self, daten: &[u8], ziel: &Path) -> ClientResult<()>;
}

/// tar + gzip
#[derive(Debug, Default, Clone, Copy)]
pub struct TarGzPacker;

impl TarGzPacker {
    pub const FORMAT: &'static str = "tar+gzip";
}

impl Packer for TarGzPacker {
    fn format(&self) -> &'static str {
        Self::FORMAT
    }

    fn packen(&self, pfad: &Path) -> ClientResult<Vec<u8>> {
        if pfad.as_os_str().is_empty() {
            return Err(ClientError::Eingabe("leerer Pfad".into()));
        }
        let metadaten = fs::metadata(pfad).map_err(|e| {
            ClientError::Eingabe(format!("{} ist nicht lesbar: {e}", pfad.display()))
        })?;
        let name = pfad
            .file_name()
            .ok_or_else(|| ClientError::Eingabe(format!("{} hat keinen Namen", pfad.display())))?;

        let encoder = GzEncoder::new(Vec::new(), Compression::default());
        let mut builder = tar::Builder::new(encoder);
        builder.follow_symlinks(false);

        if metadaten.is_dir() {
            builder.append_dir_all(name, pfad)?;
        } else {
            builder.append_path_with_name(pfad, name)?;
        }

        let daten = builder.into_inner()?.finish()?;
        tracing::debug!(pfad = %pfad.display(), groesse = daten.len(), "Pfad gepackt");
        Ok(daten)
    }

    fn entpacken(&self, daten: &[u8], ziel: &Path) -> ClientResult<()> {
        fs::create_dir_all(ziel)?;
        let mut archiv = tar::Archive::new(GzDecoder::new(daten));
        archiv.set_overwrite(false);
        // `unpack` verwirft Eintraege mit `..` oder absoluten Pfaden
        archiv
            .unpack(ziel)
            .map_err(|e| ClientError::Packen(e.to_string()))?;
        tracing::debug!(ziel = %ziel.display(), "Archiv entpackt");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn datei_roundtrip() {
        let quelle = tempfile::tempdir().unwrap();
        let datei = quelle.path().join("notiz.txt");
        fs::write(&datei, b"hello wormhole!").unwrap();

        let blob = TarGzPacker.packen(&datei).unwrap();

        let ziel = tempfile::tempdir().unwrap();
        TarGzPacker.entpacken(&blob, ziel.path()).unwrap();
        assert_eq!(
            fs::read(ziel.path().join("notiz.txt")).unwrap(),
            b"hello wormhole!"
        );
    }

    #[test]
    fn verzeichnis_roundtrip() {
        let quelle = tempfile::tempdir().unwrap();
        let ordner = quelle.path().join("bilder");
        fs::create_dir_all(ordner.join("unter")).unwrap();
        fs::write(ordner.join("a.bin"), [1u8, 2, 3]).unwrap();
        fs::write(ordner.join("unter").join("b.txt"), "b").unwrap();

        let blob = TarGzPacker.packen(&ordner).unwrap();

        let ziel = tempfile::tempdir().unwrap();
        TarGzPacker.entpacken(&blob, ziel.path()).unwrap();
        assert_eq!(fs::read(ziel.path().join("bilder/a.bin")).unwrap(), [1, 2, 3]);
        assert_eq!(
            fs::read_to_string(ziel.path().join("bilder/unter/b.txt")).unwrap(),
            "b"
        );
    }

    #[test]
    fn leerer_pfad_ist_eingabefehler() {
        assert!(matches!(
            TarGzPacker.packen(Path::new("")),
            Err(ClientError::Eingabe(_))
        ));
    }

    #[test]
    fn fehlender_pfad_ist_eingabefehler() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            TarGzPacker.packen(&dir.path().join("gibt-es-nicht")),
            Err(ClientError::Eingabe(_))
        ));
    }

    #[test]
    fn kaputtes_archiv_wird_abgelehnt() {
        let ziel = tempfile::tempdir().unwrap();
        assert!(TarGzPacker.entpacken(b"kein archiv", ziel.path()).is_err());
    }
}
