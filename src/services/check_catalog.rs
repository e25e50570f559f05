use once_cell::sync::Lazy;
use crate::config::constants::{ADMIN_ROLE, ROLE_TABLE};
use crate::enums::measure::Measure;
use crate::enums::threshold::Threshold;
use crate::structs::audit::diagnostic_check::DiagnosticCheck;

/// Lists `public` policies outside the role table that still branch on JWT claims.
pub const POLICY_DRIFT_SQL: &str = "SELECT tablename::text AS table_name,
       policyname::text AS policy_name,
       cmd::text AS command
FROM pg_policies
WHERE schemaname = 'public'
  AND tablename <> 'user_roles'
  AND (coalesce(qual, '') ILIKE '%auth.jwt()%'
       OR coalesce(with_check, '') ILIKE '%auth.jwt()%')
ORDER BY tablename, policyname";

/// Tables that must be readable but may legitimately be empty.
const READABLE_TABLES: &[&str] = &[
    "dashboard_widgets",
    "ai_knowledge",
    "ai_knowledge_documents",
    "field_business_context",
    "glossary_global",
    "glossary_customer",
    "scheduled_reports",
];

pub static DEFAULT_CHECKS: Lazy<Vec<DiagnosticCheck>> = Lazy::new(|| {
    let mut checks = vec![
        DiagnosticCheck::new(
            "admin_role_assigned",
            Measure::flag(&format!(
                "EXISTS (SELECT 1 FROM public.{ROLE_TABLE} WHERE user_id = auth.uid() AND role = '{ADMIN_ROLE}')"
            )),
            Threshold::Equals(1),
        ),
        // an admin sees every customer, a tenant-scoped user sees one
        DiagnosticCheck::new("customer_visibility", Measure::row_count("customer"), Threshold::GreaterThan(1)),
        DiagnosticCheck::new("carrier_visibility", Measure::row_count("carrier"), Threshold::GreaterThan(0)),
        DiagnosticCheck::new("shipment_visibility", Measure::row_count("shipment"), Threshold::GreaterThan(0)),
        DiagnosticCheck::new("user_roles_visibility", Measure::row_count(ROLE_TABLE), Threshold::GreaterThan(0)),
        DiagnosticCheck::new("users_customers_visibility", Measure::row_count("users_customers"), Threshold::GreaterThan(0)),
    ];

    checks.extend(READABLE_TABLES.iter().map(|table| {
        DiagnosticCheck::new(&format!("{table}_readable"), Measure::row_count(table), Threshold::AtLeast(0))
    }));

    checks
});
