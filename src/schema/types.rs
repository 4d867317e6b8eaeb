// src/schema/types.rs

use serde::{Deserialize, Serialize};

/// One normalized project, as consumed by the panel.
///
/// Field order is the serialized key order. Every optional field is written as
/// `null` when the source cell was empty or unparseable.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: String,
    pub proyecto: String,
    pub inmobiliaria: Option<String>,
    pub constructora: Option<String>,
    pub categoria: Option<String>,
    pub comuna: Option<String>,
    pub direccion: Option<String>,
    pub estado: Option<String>,
    pub entrega: Option<String>,
    pub acepta_renta_corta: Option<bool>,
    pub arriendo_garantizado: Option<String>,
    #[serde(rename = "comisionCI")]
    pub comision_ci: Option<String>,
    #[serde(rename = "comisionBP")]
    pub comision_bp: Option<String>,
    pub forma_de_pago: Option<String>,
    pub condiciones_especiales: Option<String>,
    pub observaciones: Option<String>,
    pub evento: Option<String>,
    pub datos_reserva: Option<String>,
    pub estacionamiento: Option<String>,
    pub bodega: Option<String>,
    pub precio_incluye_bono_pie: Option<bool>,
    pub bp_aplica_secundarios: Option<bool>,
    pub cuotas_antes_entrega: Option<i64>,
    pub pct_pie_antes_entrega: Option<f64>,
    pub cuotas_despues_entrega: Option<i64>,
    pub pct_pie_despues_entrega: Option<f64>,
    pub cuotas_antes_entrega_desde: Option<f64>,
    pub cuotas_despues_entrega_desde: Option<f64>,
    pub cuotas_cuoton: Option<i64>,
    pub pct_cuoton: Option<f64>,
    pub cuotas_cuoton_desde: Option<f64>,
    pub pie_en_cuotas: Option<i64>,
    pub bono_pie_pct: Option<f64>,
    pub pie_en_cuotas_pct: Option<f64>,
    pub abono_inicial: Option<f64>,
    pub descuento_pct: Option<f64>,
    #[serde(rename = "precioDesdeUF")]
    pub precio_desde_uf: Option<f64>,
    pub valor_reserva: Option<f64>,
}
