//! Lease template (residential and commercial)
//!
//! Both lease kinds share one skeleton; they differ only in the intended-use
//! phrase and the occupant-group phrase, supplied by [`LeasePhrasing`].

use super::{clauses, signature_lines, Broker, LeaseTerm};
use shared_types::ContractRecord;

/// Phrases that distinguish lease variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeasePhrasing {
    /// Destination of use, e.g. `VIVIENDA`
    pub use_phrase: &'static str,
    /// Who occupies the property along with the tenant, e.g. `grupo familiar`
    pub group_phrase: &'static str,
}

pub const RESIDENTIAL: LeasePhrasing = LeasePhrasing {
    use_phrase: "VIVIENDA",
    group_phrase: "grupo familiar",
};

pub const COMMERCIAL: LeasePhrasing = LeasePhrasing {
    use_phrase: "USO COMERCIAL",
    group_phrase: "actividad comercial",
};

pub(crate) fn render_lease(
    record: &ContractRecord,
    phrasing: &LeasePhrasing,
    term: &LeaseTerm,
    broker: &Broker<'_>,
    issued_on: &str,
) -> String {
    let r = record;
    let mut blocks: Vec<String> = Vec::with_capacity(20);

    blocks.push("**CONTRATO DE LOCACIÓN**".to_string());
    blocks.push(format!(
        "Entre el señor {}, DNI {}, con domicilio en {}, de la Ciudad de Santa Rosa, Provincia de La Pampa, por una parte y como LOCADOR, y por la otra y como LOCATARIO, {}, DNI {}, con domicilio en el inmueble objeto de ésta Locación y con domicilio electrónico {}, todos mayores de edad y hábiles para contratar, han convenido en celebrar el presente CONTRATO DE LOCACIÓN, bajo las condiciones que se establecen a continuación:",
        r.owner_name, r.owner_dni, r.owner_address, r.tenant_name, r.tenant_dni, r.tenant_email
    ));

    blocks.push("ACERCA DEL INMUEBLE".to_string());
    blocks.push(format!(
        "PRIMERA: El LOCADOR cede en locación al LOCATARIO, un inmueble de su propiedad, ubicado en {}, de la Ciudad de Santa Rosa (CP6300), Provincia de La Pampa.",
        r.property_address
    ));
    blocks.push(format!(
        "Referencia Municipal: {} /// Partida Numero: {}",
        r.municipal_reference, r.parcel_number
    ));
    blocks.push(r.property_description.clone());
    blocks.push(format!(
        "El inmueble será destinado para {} para el Locatario y su {} ({} personas), no pudiéndose cambiar este destino bajo ningún concepto.",
        phrasing.use_phrase, phrasing.group_phrase, r.family_members
    ));

    blocks.push("CONDICIONES DEL CONTRATO".to_string());
    blocks.push(format!(
        "SEGUNDA: Se establece la duración de este contrato en un plazo de {} meses, a partir del día {} y hasta el día {}, sin obligación de notificar que fenece (Art. 1198 del C. Civil y Comercial)- a cuyo vencimiento el LOCATARIO se compromete a restituir la unidad y las llaves en el domicilio del LOCADOR o donde posteriormente este se lo indicare, sin necesidad de interpelación judicial o extrajudicial alguna y sin derecho a plazo suplementario alguno.",
        r.contract_duration, term.start, term.end
    ));
    blocks.push(format!(
        "TERCERA: Se acuerda entre las partes como precio de LOCACIÓN INICIAL para los 6 primeros meses de contrato, la suma de PESOS {amount} ($ {amount}.-) mensuales, consecutivos y en efectivo; los aumentos siguientes serán cada 6 meses. {clause} Por tal motivo a partir del mes séptimo y sobre la base mencionada ($ {amount}) habrá un primer reajuste y aumento del alquiler equivalente al índice correspondiente; a partir de este y cada seis (6) meses habrá un nuevo aumento y/o actualización de valor, siendo estos acumulativos partiendo siempre del valor del semestre anterior al que deba actualizarse.",
        amount = r.monthly_amount,
        clause = clauses::clause_for(&r.adjustment_type),
    ));

    blocks.push("INTERVENCIÓN DEL CORREDOR DE COMERCIO".to_string());
    blocks.push(format!(
        "CUARTA: {} A éste el LOCADOR le reconocerá los honorarios correspondientes pactados.",
        broker.intervention()
    ));

    blocks.push("SOBRE LAS GARANTÍAS".to_string());
    blocks.push(format!(
        "DECIMAPRIMERA: A fin de garantizar el fiel cumplimiento de éste contrato y de todas las obligaciones contraídas por el LOCATARIO, éste entrega al LOCADOR en calidad de depósito, un Documento Pagaré sin protesto, por la suma de PESOS {deposit} ($ {deposit}.-), el cual quedará en poder de esta inmobiliaria durante el periodo de locación.",
        deposit = r.deposit_amount
    ));
    if let Some(clause) = guarantor_clause(r) {
        blocks.push(clause);
    }

    blocks.push(format!(
        "EN PRUEBA DE TOTAL CONFORMIDAD, y para su constancia y cumplimiento, las partes firman tres ejemplares de un mismo tenor y a un solo efecto en la Ciudad de Santa Rosa, Provincia de La Pampa, al {}.",
        issued_on
    ));
    blocks.push(signature_lines(
        &r.owner_name,
        &r.tenant_name,
        "LOCADOR                                     LOCATARIO",
    ));
    if let Some(signatures) = guarantor_signatures(r) {
        blocks.push(signatures);
    }

    blocks.join("\n\n")
}

/// DECIMASEGUNDA clause. Absent unless guarantor 1 has a name; the second
/// guarantor is only mentioned alongside the first.
fn guarantor_clause(r: &ContractRecord) -> Option<String> {
    if !r.has_guarantor1() {
        return None;
    }

    let mut clause = format!(
        "DECIMASEGUNDA: El Señor {}, DNI {}, con domicilio en {}, y con domicilio electrónico {}, quien declara ser {}",
        r.guarantor1_name, r.guarantor1_dni, r.guarantor1_address, r.guarantor1_email, r.guarantor1_job
    );
    if r.has_guarantor2() {
        clause.push_str(&format!(
            ", y el señor {}, DNI {}, con domicilio en {}, y con domicilio electrónico {}, quien declara ser {}",
            r.guarantor2_name, r.guarantor2_dni, r.guarantor2_address, r.guarantor2_email, r.guarantor2_job
        ));
    }
    clause.push_str(", presentando los recibos de sueldo correspondientes, se constituyen en Garantes Fiadores, solidarios, lisos, llanos y principales pagadores de todas y cada una de las obligaciones especificadas en el presente Contrato.");

    Some(clause)
}

fn guarantor_signatures(r: &ContractRecord) -> Option<String> {
    if !r.has_guarantor1() {
        return None;
    }

    let (second_name, second_label) = if r.has_guarantor2() {
        (r.guarantor2_name.as_str(), "GARANTE")
    } else {
        ("", "")
    };

    Some(format!(
        "________________________                    ________________________\n{}                   {}\nGARANTE                                     {}",
        r.guarantor1_name, second_name, second_label
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::BrokerDefaults;
    use pretty_assertions::assert_eq;

    fn term() -> LeaseTerm {
        LeaseTerm {
            start: "15/1/2024".to_string(),
            end: "15/1/2027".to_string(),
        }
    }

    fn render(record: &ContractRecord, phrasing: &LeasePhrasing) -> String {
        let defaults = BrokerDefaults::default();
        let broker = Broker::resolve(record, &defaults);
        render_lease(record, phrasing, &term(), &broker, "1/3/2024")
    }

    #[test]
    fn test_phrasing_is_applied() {
        let record = ContractRecord::new();
        let residential = render(&record, &RESIDENTIAL);
        assert!(residential.contains("destinado para VIVIENDA para el Locatario y su grupo familiar"));

        let commercial = render(&record, &COMMERCIAL);
        assert!(commercial
            .contains("destinado para USO COMERCIAL para el Locatario y su actividad comercial"));
        assert!(!commercial.contains("VIVIENDA"));
        assert!(!commercial.contains("grupo familiar"));
    }

    #[test]
    fn test_no_guarantor_block_without_guarantor_one() {
        let mut record = ContractRecord::new();
        record.guarantor2_name = "Solo Segundo".to_string();
        let text = render(&record, &RESIDENTIAL);
        assert!(!text.contains("DECIMASEGUNDA"));
        assert!(!text.contains("GARANTE"));
        assert!(!text.contains("Solo Segundo"));
        assert!(text.ends_with("LOCADOR                                     LOCATARIO"));
    }

    #[test]
    fn test_single_guarantor() {
        let mut record = ContractRecord::new();
        record.guarantor1_name = "Luis Paz".to_string();
        record.guarantor1_dni = "18.000.000".to_string();
        record.guarantor1_job = "docente".to_string();
        let text = render(&record, &RESIDENTIAL);

        assert!(text.contains(
            "DECIMASEGUNDA: El Señor Luis Paz, DNI 18.000.000, con domicilio en , y con domicilio electrónico , quien declara ser docente, presentando los recibos"
        ));
        assert!(!text.contains("y el señor"));
        assert!(text.ends_with(
            "________________________                    ________________________\nLuis Paz                   \nGARANTE                                     "
        ));
    }

    #[test]
    fn test_two_guarantors() {
        let mut record = ContractRecord::new();
        record.guarantor1_name = "Luis Paz".to_string();
        record.guarantor2_name = "Eva Sol".to_string();
        record.guarantor2_job = "comerciante".to_string();
        let text = render(&record, &RESIDENTIAL);

        assert!(text.contains(", y el señor Eva Sol, DNI , con domicilio en , y con domicilio electrónico , quien declara ser comerciante, presentando"));
        assert!(text.ends_with("Luis Paz                   Eva Sol\nGARANTE                                     GARANTE"));
    }

    #[test]
    fn test_term_and_amounts() {
        let mut record = ContractRecord::new();
        record.monthly_amount = "150000".to_string();
        record.deposit_amount = "300000".to_string();
        let text = render(&record, &RESIDENTIAL);

        assert!(text.contains("un plazo de 36 meses, a partir del día 15/1/2024 y hasta el día 15/1/2027, sin obligación"));
        assert!(text.contains("la suma de PESOS 150000 ($ 150000.-) mensuales"));
        assert!(text.contains("sobre la base mencionada ($ 150000) habrá"));
        assert!(text.contains("por la suma de PESOS 300000 ($ 300000.-), el cual"));
        assert!(text.contains("al 1/3/2024."));
    }

    #[test]
    fn test_unknown_adjustment_leaves_clause_empty() {
        let mut record = ContractRecord::new();
        record.adjustment_type = "OTRO".to_string();
        let text = render(&record, &RESIDENTIAL);
        assert!(text.contains("los aumentos siguientes serán cada 6 meses.  Por tal motivo"));
    }

    #[test]
    fn test_section_order() {
        let text = render(&ContractRecord::new(), &RESIDENTIAL);
        let headings = [
            "**CONTRATO DE LOCACIÓN**",
            "ACERCA DEL INMUEBLE",
            "PRIMERA:",
            "CONDICIONES DEL CONTRATO",
            "SEGUNDA:",
            "TERCERA:",
            "INTERVENCIÓN DEL CORREDOR DE COMERCIO",
            "CUARTA:",
            "SOBRE LAS GARANTÍAS",
            "DECIMAPRIMERA:",
            "EN PRUEBA DE TOTAL CONFORMIDAD",
        ];
        let positions: Vec<usize> = headings
            .iter()
            .map(|h| text.find(h).unwrap_or_else(|| panic!("missing {}", h)))
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }
}
