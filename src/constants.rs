/// Static column tables for the Goods Issue export format.
/// These constants define the mapping between the source system's column
/// labels (exact match, case- and punctuation-sensitive) and the canonical
/// database-safe identifiers the cleaned output uses.

/// Source label -> canonical field identifier.
pub const COLUMN_MAPPING: &[(&str, &str)] = &[
    ("Material", "material_id"),
    ("Delivery #", "delivery_number"),
    ("Ship-to", "ship_to"),
    ("Carrier", "carrier_name"),
    ("ShpPoint", "shipping_point"),
    ("SO Created Date", "so_created_date"),
    ("Ac.GI date", "ac_gi_date"),
    ("Delivery Date", "delivery_date"),
    ("IOD from 3PL", "iod_from_3pl"),
    ("PlanShipSt", "planned_ship_start"),
    ("S.Org(G)", "sales_org"),
    ("P/O #", "purchase_order"),
    ("Type", "record_type"),
    ("Shipment", "shipment_number"),
    ("Sold-to", "sold_to"),
    ("[WE]Name1", "customer_name"),
    ("[WE]State", "customer_state"),
    ("Pro #", "pro_number"),
    ("DOCrtDate", "document_created_date"),
    ("Serial no. profile", "serial_no_profile"),
    ("Ship Crt", "ship_crt"),
    ("G/I Date", "g_i_date"),
    ("PlanLoadSt", "planloadst"),
    ("[WE]Street", "we_street"),
    ("[WE]City", "we_city"),
    ("[WE]Country", "we_country"),
    ("[WE]Zipcode", "we_zipcode"),
    ("Division", "division"),
    ("Quantity", "quantity"),
    ("Plan G/I (DO)", "plan_g_i_do_"),
    ("Qty.Unit", "qty_unit"),
    ("Delivery type", "delivery_type"),
    ("DOCrtTime", "docrttime"),
    ("Material Group", "material_group"),
    ("Volume", "volume"),
    ("Vol.Unit", "vol_unit"),
    ("Weight", "weight"),
    ("Wgt.Unit", "wgt_unit"),
    ("ShTy", "shty"),
    ("S/O #", "s_o_"),
    ("S/O item#", "s_o_item_"),
    ("P/O item#", "p_o_item_"),
    ("Cust.Grp", "cust_grp"),
    ("Escort/Txt3", "escort_txt3"),
    ("ActLT", "actlt"),
];

/// Canonical identifiers coerced to numbers.
pub const NUMERIC_COLUMNS: &[&str] = &[
    "delivery_number",
    "sales_org",
    "shipment_number",
    "quantity",
    "volume",
    "weight",
    "s_o_",
    "s_o_item_",
    "actlt",
];

/// Canonical identifiers coerced to ISO dates.
pub const DATE_COLUMNS: &[&str] = &[
    "so_created_date",
    "ac_gi_date",
    "delivery_date",
    "iod_from_3pl",
    "planned_ship_start",
    "document_created_date",
    "ship_crt",
    "g_i_date",
    "planloadst",
    "plan_g_i_do_",
];

/// Source labels dropped unconditionally, even if a mapping exists.
pub const COLUMNS_TO_DROP: &[&str] = &["Status"];

/// Look up the canonical identifier for a source label.
pub fn canonical_name(source_label: &str) -> Option<&'static str> {
    COLUMN_MAPPING
        .iter()
        .find(|(src, _)| *src == source_label)
        .map(|(_, canonical)| *canonical)
}

/// Whether a source label is in the unconditional drop set.
pub fn is_dropped(source_label: &str) -> bool {
    COLUMNS_TO_DROP.contains(&source_label)
}

/// Whether a canonical identifier is a declared date column.
pub fn is_date_column(canonical: &str) -> bool {
    DATE_COLUMNS.contains(&canonical)
}

/// Whether a canonical identifier is a declared numeric column.
pub fn is_numeric_column(canonical: &str) -> bool {
    NUMERIC_COLUMNS.contains(&canonical)
}
