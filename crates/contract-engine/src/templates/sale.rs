//! Sale (compraventa) template

use super::{signature_lines, Broker};
use shared_types::ContractRecord;

/// The tenant fields hold the buyer and `monthly_amount` holds the price.
pub(crate) fn render_sale(record: &ContractRecord, broker: &Broker<'_>, issued_on: &str) -> String {
    let r = record;
    let blocks = [
        "**CONTRATO DE COMPRAVENTA**".to_string(),
        format!(
            "Entre el señor {}, DNI {}, con domicilio en {}, de la Ciudad de Santa Rosa, Provincia de La Pampa, en adelante denominado \"VENDEDOR\", y {}, DNI {}, con domicilio en {}, en adelante denominado \"COMPRADOR\", convienen el presente CONTRATO DE COMPRAVENTA:",
            r.owner_name, r.owner_dni, r.owner_address, r.tenant_name, r.tenant_dni, r.tenant_address
        ),
        format!(
            "PRIMERA: El VENDEDOR vende al COMPRADOR el inmueble ubicado en {}, de la Ciudad de Santa Rosa, Provincia de La Pampa.",
            r.property_address
        ),
        format!(
            "Referencia Municipal: {} /// Partida Numero: {}",
            r.municipal_reference, r.parcel_number
        ),
        format!(
            "SEGUNDA: El precio de venta se fija en la suma de PESOS {price} ($ {price}.-), que el COMPRADOR abona de la siguiente manera: [Especificar forma de pago]",
            price = r.monthly_amount
        ),
        format!("TERCERA: {}", broker.intervention()),
        format!(
            "EN PRUEBA DE CONFORMIDAD, se firman dos ejemplares en Santa Rosa, La Pampa, al {}.",
            issued_on
        ),
        signature_lines(
            &r.owner_name,
            &r.tenant_name,
            "VENDEDOR                                    COMPRADOR",
        ),
    ];

    blocks.join("\n\n")
}
