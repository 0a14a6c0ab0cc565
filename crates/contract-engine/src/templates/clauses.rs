//! Rent adjustment clauses, keyed by adjustment code

use shared_types::AdjustmentType;

const CVS_CER_CLAUSE: &str = "Conforme al Artículo 5° de la Ley 27.737, (que modifica el Art. 14° de la Ley 27.551), los ajustes en los contratos de locación de inmuebles con destino \"habitacional\" el precio del alquiler debe fijarse como valor único, en moneda nacional, y por periodos mensuales, sobre el cual podrán realizarse ajustes con la periodicidad que acuerden las partes y por intervalos no inferiores a seis (6) meses. Dichos ajustes deberán efectuarse utilizando un coeficiente conformado por la menor variación que surja de comparar el promedio del 0,90 de la variación del Coeficiente de Variación Salarial (CVS), publicado por el INDEC y la Variación del Coeficiente de Estabilización de Referencia (CER), publicado por el Banco Central de la República Argentina (BCRA).";

const ICL_CLAUSE: &str = "Los ajustes se realizarán cada seis (6) meses utilizando el Índice de Contratos de Locación (ICL) publicado por el Banco Central de la República Argentina (BCRA), conforme a la normativa vigente. Este índice surge del promedio de la variación del Índice de Precios al Consumidor (IPC) y del Coeficiente de Variación Salarial (CVS).";

const IPC_CLAUSE: &str = "Los ajustes se realizarán cada seis (6) meses aplicando la variación del Índice de Precios al Consumidor (IPC) publicado por el Instituto Nacional de Estadística y Censos (INDEC), tomando como base el mes de inicio del contrato y el mes en que se efectúe cada ajuste.";

const FIXED_CLAUSE: &str = "Las partes acuerdan que el valor del alquiler permanecerá fijo durante todo el período contractual, sin aplicación de ajustes por variación de índices. Cualquier modificación deberá ser acordada expresamente por las partes mediante addenda al presente contrato.";

/// Clause text for an adjustment methodology
pub fn adjustment_clause(adjustment: AdjustmentType) -> &'static str {
    match adjustment {
        AdjustmentType::CvsCer => CVS_CER_CLAUSE,
        AdjustmentType::Icl => ICL_CLAUSE,
        AdjustmentType::Ipc => IPC_CLAUSE,
        AdjustmentType::Fixed => FIXED_CLAUSE,
    }
}

/// Clause text for a record's adjustment code; empty for unknown codes
pub fn clause_for(code: &str) -> &'static str {
    AdjustmentType::from_code(code)
        .map(adjustment_clause)
        .unwrap_or("")
}
