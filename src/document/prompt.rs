//! Prompt assembly for the generation service.
//!
//! Pure string construction: the same request always produces the same
//! prompt. The generated document itself is requested in PT-BR, following
//! the consulting template the service was built around.

use crate::document::models::DocumentRequest;

/// Literal marker the model is instructed to emit between top-level
/// sections. The renderer turns every occurrence into a page divider.
pub const PAGE_BREAK: &str = "--- PAGE BREAK ---";

/// Placeholder stored when the service answers with an empty payload.
pub const EMPTY_RESPONSE_PLACEHOLDER: &str = "Erro ao gerar conteúdo.";

/// Build the full instruction prompt for a document request.
///
/// The caller is responsible for rejecting blank required fields first;
/// this function never fails. The effort-breakdown flag is honored only
/// when the effort-estimation flag is also set, regardless of what the
/// form allowed the user to toggle.
pub fn build_prompt(request: &DocumentRequest) -> String {
    let modules = request.modules_joined();

    let mut settings = Vec::new();
    if request.include_abap_section {
        settings.push("Incluir desenvolvimento ABAP");
    }
    if request.include_test_plan {
        settings.push("Incluir Plano de Testes");
    }
    if request.include_effort_estimation {
        settings.push("Incluir Estimativa de Esforço");
    }

    let mut prompt = format!(
        "\
# Role
Você é um Consultor SAP Specialist com vasta experiência em arquitetura de processos e documentação técnica/funcional. Seu objetivo é gerar uma especificação detalhada baseada no padrão de consultorias (Numen, Deloitte, Accenture, PwC).

# Contexto de Entrada
- **Tipo de Documento:** {doc_type}
- **Projeto:** {title}
- **Cliente:** {client}
- **Módulos SAP:** {modules}
- **Descrição Funcional:** {description}
- **Configurações:** {settings}

# Instruções de Formatação (Template Consultoria SAP)
Você deve gerar o conteúdo utilizando sintaxe Markdown clara. Para garantir que cada seção possa ser quebrada em páginas exclusivas posteriormente, utilize o marcador \"{page_break}\" entre as seções.

1. **Capa (Página 1):**
   - Título: {doc_type} - {title}
   - Cliente: {client}
   - Tabelas Autores, Históricos e Versões (Gere dados fictícios consistentes com um projeto real).

2. **Disclaimer (Página 2):**
   - Texto padrão de confidencialidade e propriedade intelectual sobre o conteúdo do documento para o cliente {client}.

3. **Índice (Página 3):**
   - Gerar um Sumário estruturado com tópicos e subtópicos.

4. **Conteúdo Principal (Página 4 em diante):**
   - **Introdução:** Objetivo do desenvolvimento focado em {description}.
   - **Processo de Negócio:** Descrição detalhada do \"As-Is\" e \"To-Be\".
   - **Requisitos Funcionais:** Detalhamento técnico-funcional (campos, tabelas SAP reais como MARA, EKKO, BSEG, etc. relevantes para os módulos {modules}).
   - **Regras de Negócio:** Lógica de validação e cálculos detalhados.
   - **User Interface (se aplicável):** Mockup de tela ou campos de seleção em formato de tabela Markdown.
   - **Tratamento de Erros:** Mensagens T100 e exceções.
",
        doc_type = request.document_type,
        title = request.title,
        client = request.client,
        modules = modules,
        description = request.description,
        settings = settings.join(", "),
        page_break = PAGE_BREAK,
    );

    if request.include_test_plan {
        prompt.push_str("   - **Plano de Testes:** Cenários de teste unitário e integrado.\n");
    }
    if request.include_effort_estimation {
        if request.include_effort_breakdown {
            prompt.push_str(
                "   - **Estimativa de Esforço:** Horas baseadas na complexidade do requisito, com memória de cálculo detalhada por atividade.\n",
            );
        } else {
            prompt.push_str(
                "   - **Estimativa de Esforço:** Horas baseadas na complexidade do requisito.\n",
            );
        }
    }

    prompt.push_str(
        "
# Diretrizes de Estilo
- Utilize negrito para destacar nomes de tabelas, transações (T-Codes) e campos técnicos.
- Linguagem: Formal, técnica e precisa.
- Idioma: Português (PT-BR).

# Execução
Com base nas informações fornecidas, gere agora o documento completo.
",
    );

    prompt
}
