//! Server-rendered HTML. Every value coming from the store or the request
//! passes through `html_escape` before it reaches the markup.

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use crate::{
  date,
  entity::{equipment, history},
};

fn layout(title: &str, body: &str) -> String {
  format!(
    r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
</head>
<body>
<nav><a href="/equipamentos">Equipamentos</a> | <a href="/cadastrar_equipamento">Cadastrar equipamento</a></nav>
<h1>{title}</h1>
{body}
</body>
</html>
"#,
    title = text(title),
  )
}

fn input(name: &str, label: &str, required: bool) -> String {
  format!(
    r#"<label>{label} <input type="text" name="{name}"{required}></label><br>
"#,
    required = if required { " required" } else { "" },
  )
}

fn textarea(name: &str, label: &str) -> String {
  format!(
    r#"<label>{label}<br><textarea name="{name}" rows="4" cols="60"></textarea></label><br>
"#
  )
}

fn notes(value: Option<&str>) -> String {
  text(value.unwrap_or_default()).into_owned()
}

pub fn register_form() -> String {
  let mut body = String::from(
    r#"<form method="post" action="/cadastrar_equipamento">
"#,
  );
  for (name, label) in [
    ("patrimonio", "Patrimônio"),
    ("nome", "Nome"),
    ("modelo", "Modelo"),
    ("marca", "Marca"),
    ("fabricante", "Fabricante"),
    ("numero_serie", "Número de série"),
  ] {
    body.push_str(&input(name, label, true));
  }
  body.push_str("<button type=\"submit\">Cadastrar</button>\n</form>\n");

  layout("Cadastrar equipamento", &body)
}

pub fn equipment_list(rows: &[equipment::Model], busca: &str) -> String {
  let mut body = format!(
    r#"<form method="get" action="/equipamentos">
<input type="search" name="busca" value="{}" placeholder="Patrimônio, nome ou modelo">
<button type="submit">Buscar</button>
</form>
"#,
    attr(busca)
  );

  if rows.is_empty() {
    body.push_str("<p>Nenhum equipamento encontrado.</p>\n");
    return layout("Equipamentos", &body);
  }

  body.push_str(
    "<table>\n<tr><th>Patrimônio</th><th>Nome</th><th>Modelo</th>\
     <th>Marca</th><th>Fabricante</th><th>Número de série</th><th></th></tr>\n",
  );
  for e in rows {
    body.push_str(&format!(
      r#"<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td><a href="/historico/{id}">Histórico</a> <a href="/adicionar_historico/{id}">Adicionar registro</a> <a href="/gerar_qr/{id}">QR Code</a></td></tr>
"#,
      text(&e.patrimonio),
      text(&e.nome),
      text(&e.modelo),
      text(&e.marca),
      text(&e.fabricante),
      text(&e.numero_serie),
      id = e.id,
    ));
  }
  body.push_str("</table>\n");

  layout("Equipamentos", &body)
}

pub fn history_form(equipment_id: i32, patrimonio: &str) -> String {
  let mut body = format!(
    r#"<p>Patrimônio: <strong>{}</strong></p>
<form method="post" action="/adicionar_historico/{equipment_id}">
"#,
    text(patrimonio)
  );
  body.push_str(&input("data", "Data (DD/MM/AAAA)", true));
  body.push_str(&input("tipo_servico", "Tipo de serviço", true));
  body.push_str(&input("responsavel_execucao", "Responsável pela execução", true));
  body.push_str(&input("responsavel_analise", "Responsável pela análise", true));
  body.push_str(&input(
    "proxima_manutencao",
    "Próxima manutenção (DD/MM/AAAA)",
    true,
  ));
  body.push_str(&input("local_uso", "Local de uso", true));
  body.push_str(&textarea("historico_detalhado", "Histórico detalhado"));
  body.push_str(&textarea("observacoes", "Observações"));
  body.push_str("<button type=\"submit\">Salvar</button>\n</form>\n");

  layout("Adicionar histórico", &body)
}

pub fn history_page(
  equipment: &equipment::Model,
  entries: &[history::Model],
) -> String {
  let mut body = format!(
    r#"<dl>
<dt>Patrimônio</dt><dd>{}</dd>
<dt>Nome</dt><dd>{}</dd>
<dt>Modelo</dt><dd>{}</dd>
<dt>Marca</dt><dd>{}</dd>
<dt>Fabricante</dt><dd>{}</dd>
<dt>Número de série</dt><dd>{}</dd>
<dt>Histórico detalhado</dt><dd>{}</dd>
<dt>Observações</dt><dd>{}</dd>
</dl>
<p><a href="/adicionar_historico/{id}">Adicionar registro</a> | <a href="/gerar_qr/{id}">Gerar QR Code</a></p>
"#,
    text(&equipment.patrimonio),
    text(&equipment.nome),
    text(&equipment.modelo),
    text(&equipment.marca),
    text(&equipment.fabricante),
    text(&equipment.numero_serie),
    notes(equipment.historico_detalhado.as_deref()),
    notes(equipment.observacoes.as_deref()),
    id = equipment.id,
  );

  if entries.is_empty() {
    body.push_str("<p>Nenhum registro de manutenção.</p>\n");
  } else {
    body.push_str(
      "<table>\n<tr><th>Data</th><th>Tipo de serviço</th>\
       <th>Execução</th><th>Análise</th><th>Próxima manutenção</th>\
       <th>Local de uso</th><th>Histórico detalhado</th>\
       <th>Observações</th></tr>\n",
    );
    for h in entries {
      body.push_str(&format!(
        "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
         <td>{}</td><td>{}</td><td>{}</td></tr>\n",
        date::display(h.data),
        text(&h.tipo_servico),
        text(&h.responsavel_execucao),
        text(&h.responsavel_analise),
        date::display(h.proxima_manutencao),
        text(&h.local_uso),
        notes(h.historico_detalhado.as_deref()),
        notes(h.observacoes.as_deref()),
      ));
    }
    body.push_str("</table>\n");
  }

  let title = format!("Histórico do equipamento {}", equipment.patrimonio);
  layout(&title, &body)
}

pub fn qr_page(equipment_id: i32, file_name: &str) -> String {
  let body = format!(
    r#"<img src="/static/qr_codes/{src}" alt="QR Code do equipamento {equipment_id}">
<p><a href="/historico/{equipment_id}">Ver histórico</a></p>
"#,
    src = attr(file_name),
  );

  layout("QR Code", &body)
}
