use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::Sector;

/// Bloco de texto tipado do relatório. The renderer decides font and
/// pagination; the assembly here decides content and order only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ReportBlock {
    Title(String),
    Heading(String),
    Line(String),
    Spacer,
}

/// Conteúdo ordenado do relatório, determinístico para entradas iguais.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportDocument {
    pub blocks: Vec<ReportBlock>,
}

fn fmt_opt(value: Option<f64>) -> String {
    value.map(|v| format!("{v}")).unwrap_or_else(|| "N/A".into())
}

fn fmt_date(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("N/A")
}

/// Normalize the AI analysis text for plain rendering: markdown bold
/// stripped, `* ` bullets turned into indented dashes, blank lines dropped.
pub fn flatten_ai_text(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| {
            let line = line.trim();
            let line = if let Some(rest) = line.strip_prefix("* ") {
                format!("  - {rest}")
            } else {
                line.to_string()
            };
            line.replace("**", "")
        })
        .filter(|line| !line.is_empty())
        .collect()
}

/// Assemble the report content for a sector snapshot.
///
/// Locations appear in REGISTRY order: a report is exhaustive, never the
/// filtered/sorted dashboard view. `generated_at_label` is an input so that
/// identical inputs always produce identical output.
pub fn build_report(
    sector: &Sector,
    include_ai: bool,
    ai_text: Option<&str>,
    generated_at_label: &str,
) -> ReportDocument {
    let mut blocks = vec![
        ReportBlock::Title("Relatório de Qualidade da Água".into()),
        ReportBlock::Heading(format!("Setor/Instituto: {}", sector.name)),
        ReportBlock::Line(format!("Última Atualização: {generated_at_label}")),
        ReportBlock::Spacer,
    ];

    if include_ai {
        if let Some(text) = ai_text {
            blocks.push(ReportBlock::Heading("Análise inicial com IA:".into()));
            for line in flatten_ai_text(text) {
                blocks.push(ReportBlock::Line(line));
            }
            blocks.push(ReportBlock::Spacer);
        }
    }

    blocks.push(ReportBlock::Heading("Detalhes dos Pontos de Coleta:".into()));
    for (index, loc) in sector.locations.iter().enumerate() {
        blocks.push(ReportBlock::Line(format!(
            "{}. Local: {} ({})",
            index + 1,
            loc.name,
            loc.fixture_type
        )));
        blocks.push(ReportBlock::Line(format!(
            "   Status: {}",
            loc.status.code().to_uppercase()
        )));
        blocks.push(ReportBlock::Line(format!(
            "   Última Análise: {} | Última Limpeza: {}",
            fmt_date(&loc.last_analysis),
            fmt_date(&loc.last_cleaning)
        )));
        blocks.push(ReportBlock::Line(format!(
            "   Cloro: {} mg/L | Col. Fecais: {} UFC/100mL",
            fmt_opt(loc.chlorine_mg_per_l),
            fmt_opt(loc.fecal_coliforms_cfu_per_100ml)
        )));
        blocks.push(ReportBlock::Line(format!(
            "   Turbidez: {} NTU | pH: {}",
            fmt_opt(loc.turbidity_ntu),
            fmt_opt(loc.ph)
        )));
        blocks.push(ReportBlock::Spacer);
    }

    ReportDocument { blocks }
}

/// Prompt enviado ao colaborador de geração de texto. One line per
/// location, registry order, `N/A` for absent measurements.
pub fn build_ai_prompt(sector: &Sector) -> String {
    let mut data = format!("Dados de qualidade da água para {}:\n", sector.name);
    for loc in &sector.locations {
        data.push_str(&format!(
            "- Local: {} ({}), Status: {}, Cloro: {} mg/L, Coliformes Fecais: {} UFC/100mL, Turbidez: {} NTU, pH: {}\n",
            loc.name,
            loc.fixture_type,
            loc.status.code(),
            fmt_opt(loc.chlorine_mg_per_l),
            fmt_opt(loc.fecal_coliforms_cfu_per_100ml),
            fmt_opt(loc.turbidity_ntu),
            fmt_opt(loc.ph),
        ));
    }
    format!(
        "Você é um especialista em qualidade da água. Analise o seguinte resumo \
         de dados de qualidade da água de um instituto universitário. Forneça uma \
         breve análise da situação geral, destaque os pontos mais críticos ou que \
         necessitam de atenção imediata, e sugira de 2 a 3 ações gerais ou \
         recomendações que os gestores poderiam considerar. Seja conciso e direto \
         ao ponto. Formate a resposta de forma clara, usando tópicos se \
         apropriado. Dados:\n{data}"
    )
}

/// Nome do arquivo PDF baixado pelo gestor.
pub fn report_file_name(sector_id: &str, date: NaiveDate) -> String {
    let sanitized: String = sector_id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!(
        "relatorio_qualidade_agua_{}_{}.pdf",
        sanitized,
        date.format("%Y_%m_%d")
    )
}

/// Corpo da requisição de geração de relatório.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateReportRequest {
    pub sector_id: String,
    pub include_ai_summary: bool,
    pub ai_summary_text: Option<String>,
}

/// Documento renderizado, pronto para pré-visualização e download.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateReportResponse {
    pub data_url: String,
    pub file_name: String,
    pub ai_summary_included: bool,
}

/// Requisição/resposta da análise com IA.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiAnalysisRequest {
    pub sector_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiAnalysisResponse {
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Location, WaterStatus};

    fn sector() -> Sector {
        Sector {
            id: "ic_ufba".into(),
            name: "Instituto de Computação (IC) - UFBA".into(),
            university_id: "ufba".into(),
            university_name: "UFBA".into(),
            logo_url: None,
            locations: vec![
                Location {
                    id: "b1".into(),
                    name: "Bebedouro Corredor Principal".into(),
                    fixture_type: "Bebedouro".into(),
                    last_analysis: Some("01/07/2025".into()),
                    last_cleaning: Some("25/06/2025".into()),
                    chlorine_mg_per_l: Some(0.5),
                    fecal_coliforms_cfu_per_100ml: Some(0.0),
                    turbidity_ntu: Some(0.8),
                    ph: Some(7.2),
                    status: WaterStatus::Good,
                },
                Location {
                    id: "v1".into(),
                    name: "Vaso Sanitário Feminino".into(),
                    fixture_type: "Vaso Sanitário".into(),
                    last_analysis: None,
                    last_cleaning: Some("02/07/2025".into()),
                    chlorine_mg_per_l: None,
                    fecal_coliforms_cfu_per_100ml: None,
                    turbidity_ntu: None,
                    ph: None,
                    status: WaterStatus::Critical,
                },
            ],
        }
    }

    #[test]
    fn report_is_deterministic() {
        let s = sector();
        let a = build_report(&s, true, Some("**Resumo** geral"), "03/07/2025 10:00:00");
        let b = build_report(&s, true, Some("**Resumo** geral"), "03/07/2025 10:00:00");
        assert_eq!(a, b);
    }

    #[test]
    fn report_follows_registry_order_not_status_order() {
        let doc = build_report(&sector(), false, None, "hoje");
        let lines: Vec<&String> = doc
            .blocks
            .iter()
            .filter_map(|b| match b {
                ReportBlock::Line(l) if l.contains("Local:") => Some(l),
                _ => None,
            })
            .collect();
        // The critical toilet stays second: registry order, never sorted.
        assert!(lines[0].contains("Bebedouro Corredor Principal"));
        assert!(lines[1].contains("Vaso Sanitário Feminino"));
    }

    #[test]
    fn absent_measurements_render_as_na() {
        let doc = build_report(&sector(), false, None, "hoje");
        let all = doc
            .blocks
            .iter()
            .filter_map(|b| match b {
                ReportBlock::Line(l) => Some(l.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("\n");
        assert!(all.contains("Cloro: N/A mg/L"));
        assert!(all.contains("Última Análise: N/A | Última Limpeza: 02/07/2025"));
        assert!(all.contains("Status: CRITICAL"));
    }

    #[test]
    fn ai_section_only_with_text() {
        let with = build_report(&sector(), true, Some("Análise."), "hoje");
        let without = build_report(&sector(), true, None, "hoje");
        let has_heading = |doc: &ReportDocument| {
            doc.blocks
                .iter()
                .any(|b| matches!(b, ReportBlock::Heading(h) if h == "Análise inicial com IA:"))
        };
        assert!(has_heading(&with));
        assert!(!has_heading(&without));
    }

    #[test]
    fn flatten_ai_text_strips_markdown() {
        let lines = flatten_ai_text("**Situação geral**\n\n* Ponto crítico no lab\n* Limpeza em dia\n");
        assert_eq!(
            lines,
            vec![
                "Situação geral".to_string(),
                "  - Ponto crítico no lab".to_string(),
                "  - Limpeza em dia".to_string(),
            ]
        );
    }

    #[test]
    fn prompt_lists_every_location_in_order() {
        let prompt = build_ai_prompt(&sector());
        assert!(prompt.starts_with("Você é um especialista em qualidade da água."));
        let first = prompt.find("Bebedouro Corredor Principal").unwrap();
        let second = prompt.find("Vaso Sanitário Feminino").unwrap();
        assert!(first < second);
        assert!(prompt.contains("Cloro: N/A mg/L"));
    }

    #[test]
    fn file_name_sanitizes_sector_id() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 3).unwrap();
        assert_eq!(
            report_file_name("ic-ufba", date),
            "relatorio_qualidade_agua_ic_ufba_2025_07_03.pdf"
        );
    }
}
