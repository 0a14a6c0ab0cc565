//! End-to-end tests: upload -> extract -> merge -> render -> export

use chrono::NaiveDate;
use contract_engine::{
    clause_for, extract, render_with, AdjustmentType, ContractField, ContractRecord,
    ContractSession, ContractType, RenderOptions, UploadError, UploadedFile,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::cell::Cell;

fn options() -> RenderOptions {
    RenderOptions::issued_on(NaiveDate::from_ymd_opt(2024, 2, 10).unwrap())
}

fn complete_record() -> ContractRecord {
    let mut record = ContractRecord::new();
    record.property_address = "Calle Pellegrini 1050".to_string();
    record.property_description = "Casa de dos dormitorios, cocina, baño y patio.".to_string();
    record.municipal_reference = "4521".to_string();
    record.parcel_number = "98.765".to_string();
    record.owner_name = "Juan Pérez".to_string();
    record.owner_dni = "20.123.456".to_string();
    record.owner_address = "Av. San Martín 100".to_string();
    record.owner_email = "juan@example.com".to_string();
    record.tenant_name = "María Gómez".to_string();
    record.tenant_dni = "27.654.321".to_string();
    record.tenant_address = "Calle 9 Nº 22".to_string();
    record.tenant_email = "maria@example.com".to_string();
    record.family_members = "3".to_string();
    record.guarantor1_name = "Luis Paz".to_string();
    record.guarantor1_dni = "18.000.000".to_string();
    record.guarantor1_address = "Calle 5 Nº 10".to_string();
    record.guarantor1_email = "luis@example.com".to_string();
    record.guarantor1_job = "empleado público".to_string();
    record.monthly_amount = "150000".to_string();
    record.deposit_amount = "150000".to_string();
    record.start_date = "2024-01-15".to_string();
    record
}

#[test]
fn scenario_a_owner_and_tenant_are_extracted() {
    let text = "Entre el señor Juan Pérez, DNI 20.123.456, con domicilio en Av. San Martín 100, \
                por una parte y como LOCADOR, y por la otra y como LOCATARIO, *** María Gómez, DNI 27.654.321, \
                con domicilio en el inmueble";
    let extracted = extract(text);

    assert_eq!(extracted.owner_name, "Juan Pérez");
    assert_eq!(extracted.owner_dni, "20.123.456");
    assert_eq!(extracted.tenant_name, "María Gómez");
    assert_eq!(extracted.tenant_dni, "27.654.321");
}

#[test]
fn scenario_b_commercial_lease_wording() {
    let text = render_with(&complete_record(), ContractType::CommercialLease, &options()).unwrap();

    assert!(text.contains("USO COMERCIAL"));
    assert!(!text.contains("VIVIENDA"));
    assert!(text.contains("su actividad comercial (3 personas)"));
    assert!(!text.contains("grupo familiar"));
}

#[test]
fn scenario_c_oversized_upload_is_rejected_before_reading() {
    let mut session = ContractSession::new(ContractType::ResidentialLease);
    let before = session.record().clone();
    let file = UploadedFile::new("contrato_anterior.txt", "text/plain", 12 * 1024 * 1024);

    let read_called = Cell::new(false);
    let result = session.import_document(&file, || {
        read_called.set(true);
        Ok(b"Entre el senor Juan, DNI 1".to_vec())
    });

    let err = result.unwrap_err();
    assert!(matches!(err, UploadError::TooLarge { .. }));
    assert_eq!(err.to_string(), "El archivo no puede ser mayor a 10MB");
    assert!(!read_called.get());
    assert_eq!(session.record(), &before);
    for (field, value) in extract("").entries() {
        assert_eq!(session.record().get(field), before.get(field));
        assert_eq!(value, "");
    }
}

#[test]
fn rendered_lease_can_be_reimported() {
    let record = complete_record();
    let text = render_with(&record, ContractType::ResidentialLease, &options()).unwrap();

    let extracted = extract(&text);
    assert_eq!(extracted.owner_name, record.owner_name);
    assert_eq!(extracted.owner_dni, record.owner_dni);
    assert_eq!(extracted.tenant_name, record.tenant_name);
    assert_eq!(extracted.tenant_dni, record.tenant_dni);
    assert_eq!(extracted.property_address, record.property_address);
    assert_eq!(extracted.municipal_reference, record.municipal_reference);
    assert_eq!(extracted.parcel_number, record.parcel_number);
    assert_eq!(extracted.monthly_amount, record.monthly_amount);
}

#[test]
fn full_residential_lease_text() {
    let text = render_with(&complete_record(), ContractType::ResidentialLease, &options()).unwrap();

    assert!(text.starts_with("**CONTRATO DE LOCACIÓN**\n\nEntre el señor Juan Pérez, DNI 20.123.456, con domicilio en Av. San Martín 100, de la Ciudad de Santa Rosa"));
    assert!(text.contains("\n\nReferencia Municipal: 4521 /// Partida Numero: 98.765\n\nCasa de dos dormitorios, cocina, baño y patio.\n\n"));
    assert!(text.contains("para VIVIENDA para el Locatario y su grupo familiar (3 personas)"));
    assert!(text.contains("a partir del día 15/1/2024 y hasta el día 15/1/2027"));
    assert!(text.contains(clause_for("CVS_CER")));
    assert!(text.contains("DECIMASEGUNDA: El Señor Luis Paz, DNI 18.000.000, con domicilio en Calle 5 Nº 10, y con domicilio electrónico luis@example.com, quien declara ser empleado público, presentando"));
    assert!(text.contains("Provincia de La Pampa, al 10/2/2024."));
    assert!(text.contains(&format!("Juan Pérez{}María Gómez\nLOCADOR", " ".repeat(24))));
}

#[test]
fn each_adjustment_type_is_inserted_verbatim() {
    for adjustment in AdjustmentType::ALL {
        let mut record = complete_record();
        record.adjustment_type = adjustment.code().to_string();
        let text = render_with(&record, ContractType::ResidentialLease, &options()).unwrap();
        assert!(text.contains(&format!(
            "los aumentos siguientes serán cada 6 meses. {} Por tal motivo",
            clause_for(adjustment.code())
        )));
    }
}

#[test]
fn month_end_rollover_clamps() {
    let mut record = complete_record();
    record.start_date = "2024-01-31".to_string();
    record.contract_duration = "1".to_string();
    let text = render_with(&record, ContractType::ResidentialLease, &options()).unwrap();
    assert!(text.contains("a partir del día 31/1/2024 y hasta el día 29/2/2024"));
}

#[test]
fn empty_record_renders_every_contract_type() {
    for contract_type in ContractType::ALL {
        let text = render_with(&ContractRecord::default(), contract_type, &options()).unwrap();
        assert!(!text.contains("undefined"));
        assert!(!text.contains("null"));
        assert!(!text.contains("{}"));
    }
}

fn record_strategy() -> impl Strategy<Value = ContractRecord> {
    let text_fields: Vec<ContractField> = ContractField::ALL
        .into_iter()
        .filter(|f| {
            !matches!(
                f,
                ContractField::StartDate | ContractField::ContractDuration
            )
        })
        .collect();
    let count = text_fields.len();

    (
        proptest::collection::vec(prop_oneof![Just(String::new()), "[A-Za-zñ .]{1,20}"], count),
        prop_oneof![Just(String::new()), Just("2024-01-15".to_string()), Just("29/2/2024".to_string())],
        prop_oneof![Just(String::new()), (0u32..240).prop_map(|m| m.to_string())],
    )
        .prop_map(move |(values, start, duration)| {
            let mut record = ContractRecord::default();
            for (field, value) in text_fields.iter().zip(values) {
                record.set(*field, value);
            }
            record.start_date = start;
            record.contract_duration = duration;
            record
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: any mix of empty and filled fields renders without error
    #[test]
    fn partial_records_always_render(record in record_strategy()) {
        for contract_type in ContractType::ALL {
            let text = render_with(&record, contract_type, &options());
            prop_assert!(text.is_ok());
            prop_assert!(!text.unwrap().contains("undefined"));
        }
    }

    /// Property: the guarantor block is gated on guarantor 1
    #[test]
    fn guarantor_block_requires_guarantor_one(record in record_strategy()) {
        let text = render_with(&record, ContractType::ResidentialLease, &options()).unwrap();
        prop_assert_eq!(text.contains("DECIMASEGUNDA"), record.has_guarantor1());
        prop_assert_eq!(text.contains(", y el señor "), record.has_guarantor2());
    }

    /// Property: rendering does not mutate the record and is deterministic
    #[test]
    fn rendering_is_pure(record in record_strategy()) {
        let before = record.clone();
        let first = render_with(&record, ContractType::CommercialLease, &options()).unwrap();
        let second = render_with(&record, ContractType::CommercialLease, &options()).unwrap();
        prop_assert_eq!(first, second);
        prop_assert_eq!(record, before);
    }
}
