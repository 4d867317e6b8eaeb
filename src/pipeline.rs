use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

use crate::config::PanelPaths;
use crate::process::load_records;
use crate::schema::{render_js, render_json, write_output};

/// Outcome of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub records: usize,
    pub json_path: PathBuf,
    pub js_path: PathBuf,
}

impl RunSummary {
    /// Human-readable line printed at the end of a run.
    pub fn message(&self) -> String {
        format!(
            "{} proyectos normalizados → {} / {}",
            self.records,
            file_name(&self.json_path),
            file_name(&self.js_path)
        )
    }
}

fn file_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Read the export, normalize it, and write both outputs.
///
/// Both documents are rendered before anything touches disk, so a failed run
/// leaves earlier outputs in place.
pub fn run(paths: &PanelPaths) -> Result<RunSummary> {
    let records = load_records(&paths.csv)?;

    let json = render_json(&records)?;
    let js = render_js(&records)?;

    write_output(&paths.json, &json)?;
    info!(path = %paths.json.display(), bytes = json.len(), "wrote JSON");
    write_output(&paths.js, &js)?;
    info!(path = %paths.js.display(), bytes = js.len(), "wrote JS");

    Ok(RunSummary {
        records: records.len(),
        json_path: paths.json.clone(),
        js_path: paths.js.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PanelError;
    use crate::schema::ProjectRecord;
    use anyhow::Result;
    use std::fs;
    use tempfile::tempdir;
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    fn init_test_logging() {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("info,panelnorm=debug")),
            )
            .with_test_writer()
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }

    const EXPORT: &str = "\u{feff}Proyectos activos al 01/10/2026,,,,,,\n\
Proyecto,Inmobiliaria,Comuna,Entrega,Cuotas antes de entrega,Cuotas después de entrega, N° total Cuotas Pie,Comisión CI,Acepta renta corta,Evento,Promociones Broker\n\
Edificio Mirador,Inmobiliaria Andes,PROVIDENCIA,1 S 2026,24,12,,\"2,5%\",Sí,,\"Bono 3%\nsolo octubre\"\n\
,Sin Nombre,Santiago,,,,,,,,\n\
Edificio Mirador,Inmobiliaria Andes,las condes,INMEDIATA,0,0,,3,no,Cyber,\n\
N/A,X,Y,,,,,,,,\n\
Parque Sur,S/D,San Miguel,2S2027,,,48,según tabla,1,,\n";

    #[test]
    fn end_to_end_run() -> Result<()> {
        init_test_logging();
        let dir = tempdir()?;
        fs::write(dir.path().join("projects_raw.csv"), EXPORT)?;
        let paths = PanelPaths::from_data_dir(dir.path());

        let summary = run(&paths)?;
        assert_eq!(summary.records, 3);
        assert_eq!(
            summary.message(),
            "3 proyectos normalizados → projects.json / projects.js"
        );

        let records: Vec<ProjectRecord> =
            serde_json::from_str(&fs::read_to_string(&paths.json)?)?;
        let ids: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["edificio-mirador-1", "edificio-mirador-3", "parque-sur-5"]
        );

        let first = &records[0];
        assert_eq!(first.comuna.as_deref(), Some("Providencia"));
        assert_eq!(first.entrega.as_deref(), Some("1S2026"));
        assert_eq!(first.pie_en_cuotas, Some(36));
        assert_eq!(first.comision_ci.as_deref(), Some("2.5%"));
        assert_eq!(first.acepta_renta_corta, Some(true));
        assert_eq!(first.evento.as_deref(), Some("Bono 3% solo octubre"));
        assert_eq!(
            first.condiciones_especiales.as_deref(),
            Some("Bono 3% solo octubre")
        );

        let second = &records[1];
        assert_eq!(second.comuna.as_deref(), Some("Las Condes"));
        assert_eq!(second.entrega.as_deref(), Some("Inmediata"));
        assert_eq!(second.pie_en_cuotas, None);
        assert_eq!(second.comision_ci.as_deref(), Some("3%"));
        assert_eq!(second.evento.as_deref(), Some("Cyber"));
        assert_eq!(second.condiciones_especiales, None);

        let third = &records[2];
        assert_eq!(third.inmobiliaria, None);
        assert_eq!(third.pie_en_cuotas, Some(48));
        assert_eq!(third.comision_ci.as_deref(), Some("según tabla"));
        assert_eq!(third.evento, None);

        let js = fs::read_to_string(&paths.js)?;
        let payload = js
            .strip_prefix("window.SELECT_PROJECTS = ")
            .and_then(|s| s.strip_suffix(';'))
            .expect("JS wrapper");
        let from_js: Vec<ProjectRecord> = serde_json::from_str(payload)?;
        assert_eq!(from_js, records);
        Ok(())
    }

    #[test]
    fn json_round_trips_including_nulls() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("projects_raw.csv"), EXPORT)?;
        let paths = PanelPaths::from_data_dir(dir.path());
        run(&paths)?;

        let expected = load_records(&paths.csv)?;
        let written: Vec<ProjectRecord> =
            serde_json::from_str(&fs::read_to_string(&paths.json)?)?;
        assert_eq!(written, expected);

        let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&paths.json)?)?;
        let obj = raw[0].as_object().expect("object");
        assert_eq!(obj.len(), 38);
        assert!(obj["bodega"].is_null());
        assert!(obj.contains_key("precioDesdeUF"));
        assert!(obj.contains_key("comisionBP"));
        Ok(())
    }

    #[test]
    fn reruns_are_byte_identical() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("projects_raw.csv"), EXPORT)?;
        let paths = PanelPaths::from_data_dir(dir.path());

        run(&paths)?;
        let json1 = fs::read(&paths.json)?;
        let js1 = fs::read(&paths.js)?;
        run(&paths)?;
        assert_eq!(fs::read(&paths.json)?, json1);
        assert_eq!(fs::read(&paths.js)?, js1);
        Ok(())
    }

    #[test]
    fn missing_export_aborts_without_output() -> Result<()> {
        let dir = tempdir()?;
        let paths = PanelPaths::from_data_dir(dir.path());

        let err = run(&paths).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PanelError>(),
            Some(PanelError::SourceMissing { .. })
        ));
        assert!(err.to_string().starts_with("CSV no encontrado: "));
        assert!(!paths.json.exists());
        assert!(!paths.js.exists());
        Ok(())
    }
}
