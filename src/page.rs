// src/page.rs

use crate::merged_table::escape_html;

/// Everything the result page shows: the form values plus a table or an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageView {
    pub tickers_value: String,
    pub start_date_value: String,
    pub end_date_value: String,
    pub results_html: Option<String>,
    pub error_message: Option<String>,
}

impl PageView {
    pub fn new(tickers_value: &str, start_date_value: &str, end_date_value: &str) -> Self {
        PageView {
            tickers_value: tickers_value.to_string(),
            start_date_value: start_date_value.to_string(),
            end_date_value: end_date_value.to_string(),
            ..PageView::default()
        }
    }

    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    pub fn with_results(mut self, table_html: String) -> Self {
        self.results_html = Some(table_html);
        self
    }

    /// Renders the full HTML document. Form values and the error are escaped;
    /// `results_html` is trusted markup produced by [`render_table`].
    ///
    /// [`render_table`]: crate::merged_table::render_table
    pub fn render(&self) -> String {
        let error_block = self
            .error_message
            .as_deref()
            .map(|message| {
                format!(
                    r#"
        <div class="mt-8 bg-red-100 border-l-4 border-red-500 text-red-700 p-4 rounded-lg" role="alert">
            <p class="font-bold">Error</p>
            <p>{}</p>
        </div>"#,
                    escape_html(message)
                )
            })
            .unwrap_or_default();

        let results_block = self
            .results_html
            .as_deref()
            .map(|table| {
                format!(
                    r#"
        <div class="mt-8 bg-white p-6 rounded-2xl shadow-lg">
            <h2 class="text-2xl font-bold mb-4 text-center">Results (closing prices)</h2>
            <div class="overflow-x-auto">
{table}
            </div>
        </div>"#
                )
            })
            .unwrap_or_default();

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Stock Price Checker</title>
    <script src="https://cdn.tailwindcss.com"></script>
    <style>
        table {{ border-collapse: collapse; }}
        th, td {{ text-align: left; padding: 8px; border-bottom: 1px solid #ddd; }}
        th {{ background-color: #f2f2f2; }}
    </style>
</head>
<body class="bg-gray-100 text-gray-800">
    <div class="container mx-auto p-4 md:p-8 max-w-5xl">
        <header class="text-center mb-8">
            <h1 class="text-3xl md:text-4xl font-bold text-gray-900">Stock Price Checker</h1>
            <p class="mt-2 text-gray-600">Historical closing prices for several tickers, side by side.</p>
        </header>

        <main class="bg-white p-6 rounded-2xl shadow-lg">
            <form method="post">
                <div class="grid grid-cols-1 md:grid-cols-4 gap-6">
                    <div class="md:col-span-2 flex flex-col">
                        <label for="tickers" class="mb-2 font-semibold text-gray-700">Tickers</label>
                        <textarea id="tickers" name="tickers" rows="4" class="w-full p-3 border border-gray-300 rounded-lg" placeholder="e.g. 7203.T, 9984.T, AAPL&#10;separate with commas, spaces or new lines" required>{tickers}</textarea>
                    </div>
                    <div class="flex flex-col">
                        <label for="start_date" class="mb-2 font-semibold text-gray-700">Start date</label>
                        <input type="date" id="start_date" name="start_date" value="{start}" class="w-full p-3 border border-gray-300 rounded-lg" required>
                    </div>
                    <div class="flex flex-col">
                        <label for="end_date" class="mb-2 font-semibold text-gray-700">End date</label>
                        <input type="date" id="end_date" name="end_date" value="{end}" class="w-full p-3 border border-gray-300 rounded-lg" required>
                    </div>
                </div>
                <div class="mt-6 text-center">
                    <button type="submit" class="w-full md:w-auto bg-blue-600 text-white font-bold py-3 px-8 rounded-lg hover:bg-blue-700">Fetch prices</button>
                </div>
            </form>
        </main>
{error_block}{results_block}
    </div>
</body>
</html>
"#,
            tickers = escape_html(&self.tickers_value),
            start = escape_html(&self.start_date_value),
            end = escape_html(&self.end_date_value),
        )
    }
}
