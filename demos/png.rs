use png_monochrome::Bitmap;
use std::error::Error;
use std::fs::File;

fn main() -> Result<(), Box<dyn Error>> {
    let file_name = "test.png";
    let width = 21;
    let rows: Vec<Vec<bool>> = (0..width)
        .map(|y| (0..width).map(|x| (x + y) % 2 == 0).collect())
        .collect();
    let bitmap = Bitmap::from_rows(rows)?;
    bitmap.write(File::create(file_name)?)?;
    println!("wrote {}x{} image to {}", bitmap.width(), bitmap.height(), file_name);
    Ok(())
}
