use crate::models::Property;
use serde_json::Value;

/// Photo references must end in one of these (case-insensitive) to be kept.
const IMAGE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "webp"];

/// Normalize one raw catalog element into a `Property`.
///
/// Every field degrades independently: a bad number becomes 0, a blank
/// string becomes its placeholder, a missing photo list becomes a single
/// per-type default image. No element is ever dropped, a non-object just
/// normalizes to an all-defaults record.
pub fn normalize_record(index: usize, raw: &Value) -> Property {
    let id = clean_string(raw.get("id_temporal"))
        .unwrap_or_else(|| format!("prop-{:04}", index));
    let property_type = clean_string(raw.get("tipo")).unwrap_or_else(|| "propiedad".to_string());

    let photos = process_photos(string_list(raw.get("fotos")), &property_type);

    Property {
        id,
        title: clean_string(raw.get("titulo")).unwrap_or_else(|| "Sin título".to_string()),
        neighborhood: clean_string(raw.get("barrio"))
            .unwrap_or_else(|| "No especificado".to_string()),
        address: clean_string(raw.get("direccion")).unwrap_or_default(),
        description: clean_string(raw.get("descripcion")).unwrap_or_default(),
        property_type,
        operation: clean_string(raw.get("operacion")).unwrap_or_else(|| "venta".to_string()),
        price: coerce_number(raw.get("precio")),
        price_currency: clean_string(raw.get("moneda_precio"))
            .unwrap_or_else(|| "USD".to_string()),
        expenses: coerce_number(raw.get("expensas")),
        expenses_currency: clean_string(raw.get("moneda_expensas"))
            .unwrap_or_else(|| "ARS".to_string()),
        rooms: coerce_number(raw.get("ambientes")) as u32,
        area_sqm: coerce_number(raw.get("metros_cuadrados")),
        pool: sentinel_flag(raw.get("pileta")),
        garage: sentinel_flag(raw.get("cochera")),
        balcony: sentinel_flag(raw.get("balcon")),
        air_conditioning: sentinel_flag(raw.get("aire_acondicionado")),
        pets_allowed: sentinel_flag(raw.get("acepta_mascotas")),
        photos,
        documents: string_list(raw.get("documentos")),
    }
}

/// Trimmed string value, `None` when missing, non-string, or blank.
fn clean_string(value: Option<&Value>) -> Option<String> {
    let s = value?.as_str()?.trim();
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

/// Numeric coercion: JSON numbers pass through, numeric strings are
/// parsed, everything else (and any negative) collapses to 0.
fn coerce_number(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    parsed.max(0.0)
}

/// Source amenity convention: the strings "Si" and "x" mean present, as
/// does a genuine JSON `true`. Any other value means absent.
fn sentinel_flag(value: Option<&Value>) -> bool {
    match value {
        Some(Value::String(s)) => s == "Si" || s == "x",
        Some(Value::Bool(b)) => *b,
        _ => false,
    }
}

/// Collect the string elements of a JSON array; anything else is empty.
fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

/// Keep only references with a recognized image extension; if none
/// survive, substitute a single per-type placeholder image.
fn process_photos(photos: Vec<String>, property_type: &str) -> Vec<String> {
    let valid: Vec<String> = photos
        .into_iter()
        .filter(|photo| has_image_extension(photo))
        .collect();

    if valid.is_empty() {
        vec![default_image_for_type(property_type)]
    } else {
        valid
    }
}

fn has_image_extension(reference: &str) -> bool {
    let lower = reference.to_lowercase();
    IMAGE_EXTENSIONS
        .iter()
        .any(|ext| lower.ends_with(&format!(".{ext}")))
}

/// Deterministic placeholder image per property type; unrecognized types
/// fall back to the generic one.
fn default_image_for_type(property_type: &str) -> String {
    let name = match property_type.to_lowercase().as_str() {
        "casa" => "casa_familiar",
        "departamento" => "departamento_palermo",
        "monoambiente" => "monoambiente",
        "oficina" => "oficina_microcentro",
        "local" => "local_comercial",
        "terreno" => "terreno_urbano",
        "ph" => "ph_lujo",
        _ => "imagen-propiedad",
    };
    format!("imgs/{name}.jpg")
}
