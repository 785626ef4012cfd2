//! Command dispatch: one store call per command, then render.

use std::io::Write;

use stockroom_core::Event;
use stockroom_inventory::{
    CodeGenerator, InventoryStore, Mutation, ProductCode, ProductEdit, ProductSlot,
};

use crate::cli::{Command, OutputFormat};
use crate::render;

/// Run one command against the store and write the result to `out`.
///
/// Domain rejections come back as `DomainError` inside the `anyhow::Error`.
pub fn execute<S, G>(
    store: &mut InventoryStore<S, G>,
    command: Command,
    format: OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<()>
where
    S: ProductSlot,
    G: CodeGenerator,
{
    match command {
        Command::Add {
            name,
            location,
            quantity,
        } => {
            let outcome = store.upsert(&name, location, quantity)?;
            match format {
                OutputFormat::Json => render::json(out, &outcome)?,
                OutputFormat::Table => render::mutation(out, &outcome.event, &outcome.product)?,
            }
        }

        Command::Adjust {
            id,
            location,
            delta,
        } => {
            let m = store.adjust(id, location, delta)?;
            emit(out, format, &m)?;
        }

        Command::Transfer { id, from, to } => {
            let to = to.unwrap_or_else(|| from.other());
            let m = store.transfer(id, from, to)?;
            emit(out, format, &m)?;
        }

        Command::Edit {
            id,
            name,
            code,
            warehouse,
            shop,
        } => {
            let current = store.get(id)?;
            let mut edit = ProductEdit::from_product(&current);
            if let Some(name) = name {
                edit.name = name;
            }
            if let Some(code) = code {
                edit.code = ProductCode::new(code);
            }
            if let Some(warehouse) = warehouse {
                edit.warehouse = warehouse;
            }
            if let Some(shop) = shop {
                edit.shop = shop;
            }
            let m = store.edit(id, edit)?;
            emit(out, format, &m)?;
        }

        Command::Remove { id } => {
            let m = store.remove(id)?;
            match format {
                OutputFormat::Json => render::json(out, &m)?,
                OutputFormat::Table => writeln!(out, "{}", m.event.message())?,
            }
        }

        Command::List { term } => {
            let term = term.unwrap_or_default();
            let products = store.search(&term)?;
            match format {
                OutputFormat::Json => render::json(out, &products)?,
                OutputFormat::Table => render::product_table(out, &products, Some(&term))?,
            }
        }

        Command::Show { id } => {
            let product = store.get(id)?;
            match format {
                OutputFormat::Json => render::json(out, &product)?,
                OutputFormat::Table => {
                    render::product_table(out, std::slice::from_ref(&product), None)?
                }
            }
        }
    }
    Ok(())
}

fn emit(out: &mut impl Write, format: OutputFormat, m: &Mutation) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => render::json(out, m)?,
        OutputFormat::Table => render::mutation(out, &m.event, &m.product)?,
    }
    Ok(())
}
