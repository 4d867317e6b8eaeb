use tracing::debug;

use crate::process::{
    convert::{format_percent_label, parse_int, parse_number, parse_percent},
    date_parser::normalize_entrega,
    raw_table::RawRow,
    trimming::{capitalize_comuna, clean_multiline, clean_text},
    utils::{parse_bool, slugify},
};
use crate::schema::ProjectRecord;

/// Header names of the export. Some carry stray leading spaces; they must
/// match byte for byte.
pub mod columns {
    pub const PROYECTO: &str = "Proyecto";
    pub const INMOBILIARIA: &str = "Inmobiliaria";
    pub const CONSTRUCTORA: &str = "Constructora";
    pub const CATEGORIA: &str = "Categoria";
    pub const COMUNA: &str = "Comuna";
    pub const DIRECCION: &str = "Dirección";
    pub const ESTADO: &str = "Estado";
    pub const ENTREGA: &str = "Entrega";
    pub const ACEPTA_RENTA_CORTA: &str = "Acepta renta corta";
    pub const ARRIENDO_GARANTIZADO: &str = "Arriendo Garantizado";
    pub const COMISION_CI: &str = "Comisión CI";
    pub const COMISION_BP: &str = "Comisión BP";
    pub const FORMA_DE_PAGO: &str = "Forma de pago";
    pub const PROMOCIONES_BROKER: &str = "Promociones Broker";
    pub const OBSERVACIONES: &str = "Observaciones, promociones y beneficios CLIENTES";
    pub const EVENTO: &str = "Evento";
    pub const DATOS_RESERVA: &str = "Datos reserva";
    pub const ESTACIONAMIENTO: &str = "Estacionamiento";
    pub const BODEGA: &str = "Bodega";
    pub const PRECIO_CONTIENE_BP: &str = "¿Precio contiene BP?";
    pub const BP_APLICA_SECUNDARIOS: &str = "¿BP aplica a secundarios?";
    pub const CUOTAS_ANTES: &str = "Cuotas antes de entrega";
    pub const PCT_PIE_ANTES: &str = "% pie antes de entrega";
    pub const CUOTAS_DESPUES: &str = "Cuotas después de entrega";
    pub const PCT_PIE_DESPUES: &str = "% Pie después de entrega";
    pub const CUOTAS_ANTES_DESDE: &str = "Cuotas antes de entrega desde";
    pub const CUOTAS_DESPUES_DESDE: &str = "Cuotas después de entrega desde";
    pub const CUOTAS_CUOTON: &str = "Cuotas Cuotón";
    pub const PCT_CUOTON: &str = "% Cuotón";
    pub const CUOTAS_CUOTON_DESDE: &str = "Cuotas Cuotón desde";
    pub const TOTAL_CUOTAS_PIE: &str = " N° total Cuotas Pie";
    pub const PCT_BONO_PIE: &str = "% Bono pie (hasta)";
    pub const PCT_PIE_EN_CUOTAS: &str = "% Pie en cuotas";
    pub const ABONO_INICIAL: &str = "Abono Inicial (hasta)";
    pub const PCT_DESCUENTO: &str = "% Descuento al precio de lista (hasta)";
    pub const PRECIO_DESDE: &str = "Precio desde (con descuento aplicado y bono pie incluido)";
    pub const VALOR_RESERVA: &str = "Valor reserva";
}

use columns as col;

/// Build the record for the `index`-th (zero-based) data row.
///
/// Returns `None` when the row has no usable project name; that is the only
/// reason a row is dropped.
pub fn normalize_row(row: &RawRow, index: usize) -> Option<ProjectRecord> {
    let Some(proyecto) = clean_text(row.get(col::PROYECTO)) else {
        debug!(index, "row without project name, skipped");
        return None;
    };

    Some(ProjectRecord {
        id: format!("{}-{}", slugify(&proyecto), index + 1),
        inmobiliaria: clean_text(row.get(col::INMOBILIARIA)),
        constructora: clean_text(row.get(col::CONSTRUCTORA)),
        categoria: clean_text(row.get(col::CATEGORIA)),
        comuna: capitalize_comuna(row.get(col::COMUNA)),
        direccion: clean_text(row.get(col::DIRECCION)),
        estado: clean_text(row.get(col::ESTADO)),
        entrega: normalize_entrega(row.get(col::ENTREGA)),
        acepta_renta_corta: parse_bool(row.get(col::ACEPTA_RENTA_CORTA)),
        arriendo_garantizado: clean_text(row.get(col::ARRIENDO_GARANTIZADO)),
        comision_ci: commission(row, col::COMISION_CI),
        comision_bp: commission(row, col::COMISION_BP),
        forma_de_pago: clean_multiline(row.get(col::FORMA_DE_PAGO)),
        condiciones_especiales: clean_multiline(row.get(col::PROMOCIONES_BROKER)),
        observaciones: clean_multiline(row.get(col::OBSERVACIONES)),
        evento: clean_text(row.get_or(col::EVENTO, col::PROMOCIONES_BROKER)),
        datos_reserva: clean_multiline(row.get(col::DATOS_RESERVA)),
        estacionamiento: clean_text(row.get(col::ESTACIONAMIENTO)),
        bodega: clean_text(row.get(col::BODEGA)),
        precio_incluye_bono_pie: parse_bool(row.get(col::PRECIO_CONTIENE_BP)),
        bp_aplica_secundarios: parse_bool(row.get(col::BP_APLICA_SECUNDARIOS)),
        cuotas_antes_entrega: parse_int(row.get(col::CUOTAS_ANTES)),
        pct_pie_antes_entrega: parse_percent(row.get(col::PCT_PIE_ANTES)),
        cuotas_despues_entrega: parse_int(row.get(col::CUOTAS_DESPUES)),
        pct_pie_despues_entrega: parse_percent(row.get(col::PCT_PIE_DESPUES)),
        cuotas_antes_entrega_desde: parse_number(row.get(col::CUOTAS_ANTES_DESDE)),
        cuotas_despues_entrega_desde: parse_number(row.get(col::CUOTAS_DESPUES_DESDE)),
        cuotas_cuoton: parse_int(row.get(col::CUOTAS_CUOTON)),
        pct_cuoton: parse_percent(row.get(col::PCT_CUOTON)),
        cuotas_cuoton_desde: parse_number(row.get(col::CUOTAS_CUOTON_DESDE)),
        pie_en_cuotas: pie_installments(row),
        bono_pie_pct: parse_percent(row.get(col::PCT_BONO_PIE)),
        pie_en_cuotas_pct: parse_percent(row.get(col::PCT_PIE_EN_CUOTAS)),
        abono_inicial: parse_percent(row.get(col::ABONO_INICIAL)),
        descuento_pct: parse_percent(row.get(col::PCT_DESCUENTO)),
        precio_desde_uf: parse_number(row.get(col::PRECIO_DESDE)),
        valor_reserva: parse_number(row.get(col::VALOR_RESERVA)),
        proyecto,
    })
}

/// Commission cells hold either a percentage ("3", "2,5%") or free text
/// ("según tabla"); keep the text when it is not a number.
fn commission(row: &RawRow, column: &str) -> Option<String> {
    let raw = row.get(column);
    format_percent_label(raw).or_else(|| clean_text(raw))
}

/// Total pie installments: the explicit total when it parses, otherwise
/// before + after delivery. A zero sum means "unknown".
fn pie_installments(row: &RawRow) -> Option<i64> {
    if let Some(total) = parse_int(row.get(col::TOTAL_CUOTAS_PIE)) {
        return Some(total);
    }
    let before = parse_int(row.get(col::CUOTAS_ANTES)).unwrap_or(0);
    let after = parse_int(row.get(col::CUOTAS_DESPUES)).unwrap_or(0);
    Some(before + after).filter(|&sum| sum != 0)
}
