use crate::feature_space::FeatureSpace;
use crate::labels::LabelTable;
use crate::splitter::Split;

/// Default name of the generated header; the include guard derives from it.
pub const DEFAULT_ARTIFACT_NAME: &str = "home_train_data.h";

/// Renders the complete C++ declaration block for one dataset.
///
/// The layout is byte-stable for a given input: section order, indentation
/// and comma/brace placement never depend on array contents, so
/// single-element and empty literals stay well-formed initializers. Values
/// are written in base 10 with no decimal point.
pub struct ArtifactWriter<'a> {
    file_name: &'a str,
    labels: &'a LabelTable,
    space: &'a FeatureSpace,
    split: &'a Split,
}

impl<'a> ArtifactWriter<'a> {
    /// Create a writer for one rendered artifact.
    pub fn new(
        file_name: &'a str,
        labels: &'a LabelTable,
        space: &'a FeatureSpace,
        split: &'a Split,
    ) -> Self {
        Self {
            file_name,
            labels,
            space,
            split,
        }
    }

    /// Render the whole artifact into a single string. Nothing is written
    /// to disk here, so a failing caller never leaves a partial artifact.
    pub fn render(&self) -> String {
        debug_assert!(
            self.split
                .x_train
                .iter()
                .chain(&self.split.x_test)
                .all(|row| row.len() == self.space.len()),
            "every feature row must span the full feature space"
        );

        let mut out = String::new();
        self.write_header(&mut out);
        self.write_target_table(&mut out);
        self.write_index_map(&mut out);
        write_x_matrix(&mut out, "vec_X_train", &self.split.x_train);
        write_y_vector(&mut out, "vec_Y_train", &self.split.y_train);
        write_x_matrix(&mut out, "vec_X_test", &self.split.x_test);
        write_y_vector(&mut out, "vec_Y_test", &self.split.y_test);
        self.write_footer(&mut out);
        out
    }

    /// Include guard: `home_train_data.h` becomes `__HOME_TRAIN_DATA_H_`.
    fn guard_name(&self) -> String {
        format!("__{}_", self.file_name.replace('.', "_").to_uppercase())
    }

    fn write_header(&self, out: &mut String) {
        let guard = self.guard_name();
        out.push_str("#pragma once\n\n");
        out.push_str(&format!("#ifndef {}\n", guard));
        out.push_str(&format!("#define {}\n\n", guard));
        out.push_str("#include <string>\n#include <vector>\n#include <map>\n\n");
        out.push_str("using namespace std;\n");
    }

    fn write_footer(&self, out: &mut String) {
        out.push_str("\n#endif\n");
    }

    /// Class names in discovery order, indexed by class integer.
    fn write_target_table(&self, out: &mut String) {
        out.push_str("\n// Lookup table of routers, Y int target to Y classifier Class name target.\n");
        out.push_str("// Usage pattern \"vec_target_table_Y[Y_int]\"\n");
        out.push_str("vector<string> vec_target_table_Y\n{\n");
        let count = self.labels.len();
        for (name, index) in self.labels.iter() {
            out.push_str(&format!("    \"{}\"", name));
            if (index as usize) + 1 < count {
                out.push(',');
            }
            out.push('\n');
        }
        out.push_str("};\n");
    }

    /// Declared as a router-name to feature-index map, but filled from the
    /// label table: this mirrors the layout existing consumers compile
    /// against. The semantically-correct column indices are available from
    /// [`FeatureSpace::index_of`].
    fn write_index_map(&self, out: &mut String) {
        out.push_str("\n// HashTable -> X router_name (string) to feature_index (size_t).\n");
        out.push_str("map<string,int> map_x_router_name_to_index\n{\n");
        let count = self.labels.len();
        for (name, index) in self.labels.iter() {
            out.push_str(&format!("    {{\"{}\", {}}}", name, index));
            if (index as usize) + 1 < count {
                out.push(',');
            }
            out.push('\n');
        }
        out.push_str("};\n");
    }
}

fn write_x_matrix(out: &mut String, var_name: &str, rows: &[Vec<u32>]) {
    out.push_str(&format!("\nvector<vector<float>> {}\n{{\n", var_name));
    let count = rows.len();
    for (index, row) in rows.iter().enumerate() {
        out.push_str("    {");
        for (column, value) in row.iter().enumerate() {
            if column > 0 {
                out.push(',');
            }
            out.push_str(&value.to_string());
        }
        out.push('}');
        if index + 1 < count {
            out.push(',');
        }
        out.push('\n');
    }
    out.push_str("};\n");
}

fn write_y_vector(out: &mut String, var_name: &str, values: &[u32]) {
    out.push_str(&format!("\nvector<int> {}\n{{\n", var_name));
    let count = values.len();
    for (index, value) in values.iter().enumerate() {
        out.push_str(&format!("    {}", value));
        if index + 1 < count {
            out.push(',');
        }
        out.push('\n');
    }
    out.push_str("};\n");
}
