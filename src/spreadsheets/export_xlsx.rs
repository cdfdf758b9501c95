use crate::analysis::{BuyRow, SellRow};
use crate::errors::ServerError;
use crate::responses::xlsx_response;
use crate::responses::ResultResp;
use rust_xlsxwriter::{Workbook, Worksheet};

const BUY_HEADERS: [&str; 6] = ["id", "zipcode", "price", "median_price", "condition", "buy"];

const SELL_HEADERS: [&str; 7] = [
    "id",
    "zipcode",
    "season",
    "median_zipcode_season",
    "price",
    "sell_value",
    "profit",
];

fn write_headers(worksheet: &mut Worksheet, headers: &[&str]) -> Result<(), ServerError> {
    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{}': {}", header, e))
            })?;
    }
    Ok(())
}

fn num(worksheet: &mut Worksheet, r: u32, c: u16, value: f64, what: &str) -> Result<(), ServerError> {
    worksheet
        .write_number(r, c, value)
        .map_err(|e| ServerError::XlsxError(format!("Failed to write {what}: {e}")))?;
    Ok(())
}

fn text(worksheet: &mut Worksheet, r: u32, c: u16, value: &str, what: &str) -> Result<(), ServerError> {
    worksheet
        .write_string(r, c, value)
        .map_err(|e| ServerError::XlsxError(format!("Failed to write {what}: {e}")))?;
    Ok(())
}

pub fn buy_report_workbook(rows: &[BuyRow]) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    write_headers(worksheet, &BUY_HEADERS)?;

    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        num(worksheet, r, 0, row.id as f64, "id")?;
        num(worksheet, r, 1, row.zipcode as f64, "zipcode")?;
        num(worksheet, r, 2, row.price, "price")?;
        num(worksheet, r, 3, row.median_price, "median price")?;
        num(worksheet, r, 4, row.condition as f64, "condition")?;
        text(worksheet, r, 5, row.buy.as_str(), "buy")?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {}", e)))
}

pub fn sell_report_workbook(rows: &[SellRow]) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    write_headers(worksheet, &SELL_HEADERS)?;

    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        num(worksheet, r, 0, row.id as f64, "id")?;
        num(worksheet, r, 1, row.zipcode as f64, "zipcode")?;
        text(worksheet, r, 2, row.season.as_str(), "season")?;
        num(worksheet, r, 3, row.median_zipcode_season, "zipcode/season median")?;
        num(worksheet, r, 4, row.price, "price")?;
        num(worksheet, r, 5, row.sell_value, "sell value")?;
        num(worksheet, r, 6, row.profit, "profit")?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {}", e)))
}

pub fn export_buy_report_xlsx(rows: &[BuyRow]) -> ResultResp {
    xlsx_response(buy_report_workbook(rows)?, "houses_to_buy.xlsx")
}

pub fn export_sell_report_xlsx(rows: &[SellRow]) -> ResultResp {
    xlsx_response(sell_report_workbook(rows)?, "houses_to_sell.xlsx")
}
